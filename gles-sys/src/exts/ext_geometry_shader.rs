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

//! GL_EXT_geometry_shader
//!
//! Geometry shader stage between vertex processing and the rasterizer.
//! Requires ES 3.1 and GL_EXT_shader_io_blocks.

use crate::{GLenum, GLint, GLuint};

pub const EXT_GEOMETRY_SHADER: &str = "GL_EXT_geometry_shader";

// Accepted by the {type} parameter of CreateShader, and returned by
// GetShaderiv when {pname} is SHADER_TYPE.
pub const GL_GEOMETRY_SHADER_EXT: GLenum = 0x8DD9;

// Accepted by the {stages} parameter of UseProgramStages.
pub const GL_GEOMETRY_SHADER_BIT_EXT: GLenum = 0x00000004;

// Accepted by the {pname} parameter of GetProgramiv.
pub const GL_GEOMETRY_LINKED_VERTICES_OUT_EXT: GLenum = 0x8916;
pub const GL_GEOMETRY_LINKED_INPUT_TYPE_EXT: GLenum = 0x8917;
pub const GL_GEOMETRY_LINKED_OUTPUT_TYPE_EXT: GLenum = 0x8918;
pub const GL_GEOMETRY_SHADER_INVOCATIONS_EXT: GLenum = 0x887F;

// Accepted by the {pname} parameter of GetBooleanv, GetIntegerv, GetFloatv
// and GetInteger64v.
pub const GL_LAYER_PROVOKING_VERTEX_EXT: GLenum = 0x825E;
pub const GL_MAX_GEOMETRY_UNIFORM_COMPONENTS_EXT: GLenum = 0x8DDF;
pub const GL_MAX_GEOMETRY_UNIFORM_BLOCKS_EXT: GLenum = 0x8A2C;
pub const GL_MAX_COMBINED_GEOMETRY_UNIFORM_COMPONENTS_EXT: GLenum = 0x8A32;
pub const GL_MAX_GEOMETRY_INPUT_COMPONENTS_EXT: GLenum = 0x9123;
pub const GL_MAX_GEOMETRY_OUTPUT_COMPONENTS_EXT: GLenum = 0x9124;
pub const GL_MAX_GEOMETRY_OUTPUT_VERTICES_EXT: GLenum = 0x8DE0;
pub const GL_MAX_GEOMETRY_TOTAL_OUTPUT_COMPONENTS_EXT: GLenum = 0x8DE1;
pub const GL_MAX_GEOMETRY_SHADER_INVOCATIONS_EXT: GLenum = 0x8E5A;
pub const GL_MAX_GEOMETRY_TEXTURE_IMAGE_UNITS_EXT: GLenum = 0x8C29;
pub const GL_MAX_GEOMETRY_ATOMIC_COUNTER_BUFFERS_EXT: GLenum = 0x92CF;
pub const GL_MAX_GEOMETRY_ATOMIC_COUNTERS_EXT: GLenum = 0x92D5;
pub const GL_MAX_GEOMETRY_IMAGE_UNIFORMS_EXT: GLenum = 0x90CD;
pub const GL_MAX_GEOMETRY_SHADER_STORAGE_BLOCKS_EXT: GLenum = 0x90D7;
pub const GL_MAX_FRAMEBUFFER_LAYERS_EXT: GLenum = 0x9317;

// Returned by GetIntegerv when {pname} is LAYER_PROVOKING_VERTEX_EXT.
pub const GL_FIRST_VERTEX_CONVENTION_EXT: GLenum = 0x8E4D;
pub const GL_LAST_VERTEX_CONVENTION_EXT: GLenum = 0x8E4E;
pub const GL_UNDEFINED_VERTEX_EXT: GLenum = 0x8260;

// Accepted by the {mode} parameter of DrawArrays, DrawElements and other
// commands which draw primitives.
pub const GL_LINES_ADJACENCY_EXT: GLenum = 0x000A;
pub const GL_LINE_STRIP_ADJACENCY_EXT: GLenum = 0x000B;
pub const GL_TRIANGLES_ADJACENCY_EXT: GLenum = 0x000C;
pub const GL_TRIANGLE_STRIP_ADJACENCY_EXT: GLenum = 0x000D;

// Accepted by the {target} parameter of BeginQuery, EndQuery and GetQueryiv.
pub const GL_PRIMITIVES_GENERATED_EXT: GLenum = 0x8C87;

// Accepted by the {pname} parameter of FramebufferParameteri and
// GetFramebufferParameteriv.
pub const GL_FRAMEBUFFER_DEFAULT_LAYERS_EXT: GLenum = 0x9312;

// Returned by CheckFramebufferStatus.
pub const GL_FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS_EXT: GLenum = 0x8DA8;

// Accepted by the {pname} parameter of GetFramebufferAttachmentParameteriv.
pub const GL_FRAMEBUFFER_ATTACHMENT_LAYERED_EXT: GLenum = 0x8DA7;

// Accepted by the {props} parameter of GetProgramResourceiv.
pub const GL_REFERENCED_BY_GEOMETRY_SHADER_EXT: GLenum = 0x9309;

pub type PFNGLFRAMEBUFFERTEXTUREEXTPROC =
    unsafe extern "system" fn(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint);
