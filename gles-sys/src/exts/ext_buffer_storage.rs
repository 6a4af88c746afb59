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

//! GL_EXT_buffer_storage
//!
//! Immutable buffer stores with persistent and coherent mapping flags.

use std::os::raw::c_void;

use crate::{GLbitfield, GLenum, GLsizeiptr};

pub const EXT_BUFFER_STORAGE: &str = "GL_EXT_buffer_storage";

// Accepted by the {flags} parameter of BufferStorageEXT. MAP_READ_BIT and
// MAP_WRITE_BIT are the core ES 3.0 values.
pub const GL_MAP_PERSISTENT_BIT_EXT: GLbitfield = 0x0040;
pub const GL_MAP_COHERENT_BIT_EXT: GLbitfield = 0x0080;
pub const GL_DYNAMIC_STORAGE_BIT_EXT: GLbitfield = 0x0100;
pub const GL_CLIENT_STORAGE_BIT_EXT: GLbitfield = 0x0200;

// Accepted by the {barriers} parameter of MemoryBarrier.
pub const GL_CLIENT_MAPPED_BUFFER_BARRIER_BIT_EXT: GLbitfield = 0x00004000;

// Accepted by the {pname} parameter of GetBufferParameteriv.
pub const GL_BUFFER_IMMUTABLE_STORAGE_EXT: GLenum = 0x821F;
pub const GL_BUFFER_STORAGE_FLAGS_EXT: GLenum = 0x8220;

pub type PFNGLBUFFERSTORAGEEXTPROC = unsafe extern "system" fn(
    target: GLenum,
    size: GLsizeiptr,
    data: *const c_void,
    flags: GLbitfield
);
