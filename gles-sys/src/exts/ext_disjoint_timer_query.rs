// Copyright (c) 2022, BlockProject 3D
//
// All rights reserved.
//
// Redistribution and use in source and binary forms, with or without modification,
// are permitted provided that the following conditions are met:
//
//     * Redistributions of source code must retain the above copyright notice,
//       this list of conditions and the following disclaimer.
//     * Redistributions in binary form must reproduce the above copyright notice,
//       this list of conditions and the following disclaimer in the documentation
//       and/or other materials provided with the distribution.
//     * Neither the name of BlockProject 3D nor the names of its contributors
//       may be used to endorse or promote products derived from this software
//       without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS
// "AS IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT
// LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR
// A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT OWNER OR
// CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL,
// EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO,
// PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR
// PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF
// LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING
// NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE OF THIS
// SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

//! GL_EXT_disjoint_timer_query
//!
//! GPU timestamps and elapsed-time queries, with a disjoint flag reporting
//! clock discontinuities that invalidate in-flight measurements.

use crate::{GLboolean, GLenum, GLint, GLint64, GLsizei, GLuint, GLuint64};

pub const EXT_DISJOINT_TIMER_QUERY: &str = "GL_EXT_disjoint_timer_query";

// Accepted by the {pname} parameter of GetQueryivEXT.
pub const GL_QUERY_COUNTER_BITS_EXT: GLenum = 0x8864;
pub const GL_CURRENT_QUERY_EXT: GLenum = 0x8865;

// Accepted by the {pname} parameter of GetQueryObjectivEXT and friends.
pub const GL_QUERY_RESULT_EXT: GLenum = 0x8866;
pub const GL_QUERY_RESULT_AVAILABLE_EXT: GLenum = 0x8867;

// Accepted by the {target} parameter of BeginQueryEXT, EndQueryEXT and
// GetQueryivEXT.
pub const GL_TIME_ELAPSED_EXT: GLenum = 0x88BF;

// Accepted by the {target} parameter of GetQueryivEXT and QueryCounterEXT.
pub const GL_TIMESTAMP_EXT: GLenum = 0x8E28;

// Accepted by the {value} parameter of GetBooleanv, GetIntegerv and
// GetInteger64v.
pub const GL_GPU_DISJOINT_EXT: GLenum = 0x8FBB;

pub type PFNGLGENQUERIESEXTPROC = unsafe extern "system" fn(n: GLsizei, ids: *mut GLuint);
pub type PFNGLDELETEQUERIESEXTPROC = unsafe extern "system" fn(n: GLsizei, ids: *const GLuint);
pub type PFNGLISQUERYEXTPROC = unsafe extern "system" fn(id: GLuint) -> GLboolean;
pub type PFNGLBEGINQUERYEXTPROC = unsafe extern "system" fn(target: GLenum, id: GLuint);
pub type PFNGLENDQUERYEXTPROC = unsafe extern "system" fn(target: GLenum);
pub type PFNGLQUERYCOUNTEREXTPROC = unsafe extern "system" fn(id: GLuint, target: GLenum);
pub type PFNGLGETQUERYIVEXTPROC =
    unsafe extern "system" fn(target: GLenum, pname: GLenum, params: *mut GLint);
pub type PFNGLGETQUERYOBJECTIVEXTPROC =
    unsafe extern "system" fn(id: GLuint, pname: GLenum, params: *mut GLint);
pub type PFNGLGETQUERYOBJECTUIVEXTPROC =
    unsafe extern "system" fn(id: GLuint, pname: GLenum, params: *mut GLuint);
pub type PFNGLGETQUERYOBJECTI64VEXTPROC =
    unsafe extern "system" fn(id: GLuint, pname: GLenum, params: *mut GLint64);
pub type PFNGLGETQUERYOBJECTUI64VEXTPROC =
    unsafe extern "system" fn(id: GLuint, pname: GLenum, params: *mut GLuint64);
