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

//! GL_OES_vertex_array_object
//!
//! Vertex array objects encapsulating vertex attribute state on ES 2.0.

use crate::{GLboolean, GLenum, GLsizei, GLuint};

pub const OES_VERTEX_ARRAY_OBJECT: &str = "GL_OES_vertex_array_object";

// Accepted by the {pname} parameter of GetBooleanv, GetIntegerv and
// GetFloatv.
pub const GL_VERTEX_ARRAY_BINDING_OES: GLenum = 0x85B5;

pub type PFNGLBINDVERTEXARRAYOESPROC = unsafe extern "system" fn(array: GLuint);
pub type PFNGLDELETEVERTEXARRAYSOESPROC = unsafe extern "system" fn(n: GLsizei, arrays: *const GLuint);
pub type PFNGLGENVERTEXARRAYSOESPROC = unsafe extern "system" fn(n: GLsizei, arrays: *mut GLuint);
pub type PFNGLISVERTEXARRAYOESPROC = unsafe extern "system" fn(array: GLuint) -> GLboolean;
