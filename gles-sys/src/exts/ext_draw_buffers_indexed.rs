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

//! GL_EXT_draw_buffers_indexed
//!
//! Per-draw-buffer blend state and color masks. Defines no new tokens; the
//! indexed commands accept the core BLEND and draw buffer enums.

use crate::{GLboolean, GLenum, GLuint};

pub const EXT_DRAW_BUFFERS_INDEXED: &str = "GL_EXT_draw_buffers_indexed";

pub type PFNGLENABLEIEXTPROC = unsafe extern "system" fn(target: GLenum, index: GLuint);
pub type PFNGLDISABLEIEXTPROC = unsafe extern "system" fn(target: GLenum, index: GLuint);
pub type PFNGLBLENDEQUATIONIEXTPROC = unsafe extern "system" fn(buf: GLuint, mode: GLenum);
pub type PFNGLBLENDEQUATIONSEPARATEIEXTPROC =
    unsafe extern "system" fn(buf: GLuint, modeRGB: GLenum, modeAlpha: GLenum);
pub type PFNGLBLENDFUNCIEXTPROC = unsafe extern "system" fn(buf: GLuint, src: GLenum, dst: GLenum);
pub type PFNGLBLENDFUNCSEPARATEIEXTPROC = unsafe extern "system" fn(
    buf: GLuint,
    srcRGB: GLenum,
    dstRGB: GLenum,
    srcAlpha: GLenum,
    dstAlpha: GLenum
);
pub type PFNGLCOLORMASKIEXTPROC = unsafe extern "system" fn(
    index: GLuint,
    r: GLboolean,
    g: GLboolean,
    b: GLboolean,
    a: GLboolean
);
pub type PFNGLISENABLEDIEXTPROC = unsafe extern "system" fn(target: GLenum, index: GLuint) -> GLboolean;
