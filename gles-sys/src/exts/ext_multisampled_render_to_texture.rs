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

//! GL_EXT_multisampled_render_to_texture
//!
//! Multisampled rendering into a single-sample texture attachment, with the
//! resolve performed implicitly by the driver on tile flush.

use crate::{GLenum, GLint, GLsizei, GLuint};

pub const EXT_MULTISAMPLED_RENDER_TO_TEXTURE: &str = "GL_EXT_multisampled_render_to_texture";

// Accepted by the {pname} parameter of GetRenderbufferParameteriv.
pub const GL_RENDERBUFFER_SAMPLES_EXT: GLenum = 0x8CAB;

// Returned by CheckFramebufferStatus.
pub const GL_FRAMEBUFFER_INCOMPLETE_MULTISAMPLE_EXT: GLenum = 0x8D56;

// Accepted by the {pname} parameter of GetBooleanv, GetIntegerv and
// GetFloatv.
pub const GL_MAX_SAMPLES_EXT: GLenum = 0x8D57;

// Accepted by the {pname} parameter of GetFramebufferAttachmentParameteriv.
pub const GL_FRAMEBUFFER_ATTACHMENT_TEXTURE_SAMPLES_EXT: GLenum = 0x8D6C;

pub type PFNGLRENDERBUFFERSTORAGEMULTISAMPLEEXTPROC = unsafe extern "system" fn(
    target: GLenum,
    samples: GLsizei,
    internalformat: GLenum,
    width: GLsizei,
    height: GLsizei
);
pub type PFNGLFRAMEBUFFERTEXTURE2DMULTISAMPLEEXTPROC = unsafe extern "system" fn(
    target: GLenum,
    attachment: GLenum,
    textarget: GLenum,
    texture: GLuint,
    level: GLint,
    samples: GLsizei
);
