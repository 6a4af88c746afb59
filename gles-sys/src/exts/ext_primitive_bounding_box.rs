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

//! GL_EXT_primitive_bounding_box
//!
//! Application-provided bounding box used to skip per-primitive tessellation
//! and geometry work outside the box.

use crate::{GLenum, GLfloat};

pub const EXT_PRIMITIVE_BOUNDING_BOX: &str = "GL_EXT_primitive_bounding_box";

// Accepted by the {pname} parameter of GetBooleanv, GetIntegerv, GetFloatv
// and GetInteger64v.
pub const GL_PRIMITIVE_BOUNDING_BOX_EXT: GLenum = 0x92BE;

pub type PFNGLPRIMITIVEBOUNDINGBOXEXTPROC = unsafe extern "system" fn(
    minX: GLfloat,
    minY: GLfloat,
    minZ: GLfloat,
    minW: GLfloat,
    maxX: GLfloat,
    maxY: GLfloat,
    maxZ: GLfloat,
    maxW: GLfloat
);
