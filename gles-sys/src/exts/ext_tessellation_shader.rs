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

//! GL_EXT_tessellation_shader
//!
//! Tessellation control/evaluation stages operating on patch primitives.
//! Requires ES 3.1 and GL_EXT_shader_io_blocks.

use crate::{GLenum, GLint};

pub const EXT_TESSELLATION_SHADER: &str = "GL_EXT_tessellation_shader";

// Accepted by the {mode} parameter of DrawArrays, DrawElements and other
// commands which draw primitives.
pub const GL_PATCHES_EXT: GLenum = 0x000E;

// Accepted by the {pname} parameter of PatchParameteriEXT, GetBooleanv,
// GetFloatv, GetIntegerv and GetInteger64v.
pub const GL_PATCH_VERTICES_EXT: GLenum = 0x8E72;

// Accepted by the {pname} parameter of GetProgramiv.
pub const GL_TESS_CONTROL_OUTPUT_VERTICES_EXT: GLenum = 0x8E75;
pub const GL_TESS_GEN_MODE_EXT: GLenum = 0x8E76;
pub const GL_TESS_GEN_SPACING_EXT: GLenum = 0x8E77;
pub const GL_TESS_GEN_VERTEX_ORDER_EXT: GLenum = 0x8E78;
pub const GL_TESS_GEN_POINT_MODE_EXT: GLenum = 0x8E79;

// Returned by GetProgramiv when {pname} is TESS_GEN_MODE_EXT.
pub const GL_ISOLINES_EXT: GLenum = 0x8E7A;
pub const GL_QUADS_EXT: GLenum = 0x0007;

// Returned by GetProgramiv when {pname} is TESS_GEN_SPACING_EXT.
pub const GL_FRACTIONAL_ODD_EXT: GLenum = 0x8E7B;
pub const GL_FRACTIONAL_EVEN_EXT: GLenum = 0x8E7C;

// Accepted by the {pname} parameter of GetBooleanv, GetFloatv, GetIntegerv
// and GetInteger64v.
pub const GL_MAX_PATCH_VERTICES_EXT: GLenum = 0x8E7D;
pub const GL_MAX_TESS_GEN_LEVEL_EXT: GLenum = 0x8E7E;
pub const GL_MAX_TESS_CONTROL_UNIFORM_COMPONENTS_EXT: GLenum = 0x8E7F;
pub const GL_MAX_TESS_EVALUATION_UNIFORM_COMPONENTS_EXT: GLenum = 0x8E80;
pub const GL_MAX_TESS_CONTROL_TEXTURE_IMAGE_UNITS_EXT: GLenum = 0x8E81;
pub const GL_MAX_TESS_EVALUATION_TEXTURE_IMAGE_UNITS_EXT: GLenum = 0x8E82;
pub const GL_MAX_TESS_CONTROL_OUTPUT_COMPONENTS_EXT: GLenum = 0x8E83;
pub const GL_MAX_TESS_PATCH_COMPONENTS_EXT: GLenum = 0x8E84;
pub const GL_MAX_TESS_CONTROL_TOTAL_OUTPUT_COMPONENTS_EXT: GLenum = 0x8E85;
pub const GL_MAX_TESS_EVALUATION_OUTPUT_COMPONENTS_EXT: GLenum = 0x8E86;
pub const GL_MAX_TESS_CONTROL_UNIFORM_BLOCKS_EXT: GLenum = 0x8E89;
pub const GL_MAX_TESS_EVALUATION_UNIFORM_BLOCKS_EXT: GLenum = 0x8E8A;
pub const GL_MAX_TESS_CONTROL_INPUT_COMPONENTS_EXT: GLenum = 0x886C;
pub const GL_MAX_TESS_EVALUATION_INPUT_COMPONENTS_EXT: GLenum = 0x886D;
pub const GL_MAX_COMBINED_TESS_CONTROL_UNIFORM_COMPONENTS_EXT: GLenum = 0x8E1E;
pub const GL_MAX_COMBINED_TESS_EVALUATION_UNIFORM_COMPONENTS_EXT: GLenum = 0x8E1F;
pub const GL_MAX_TESS_CONTROL_ATOMIC_COUNTER_BUFFERS_EXT: GLenum = 0x92CD;
pub const GL_MAX_TESS_EVALUATION_ATOMIC_COUNTER_BUFFERS_EXT: GLenum = 0x92CE;
pub const GL_MAX_TESS_CONTROL_ATOMIC_COUNTERS_EXT: GLenum = 0x92D3;
pub const GL_MAX_TESS_EVALUATION_ATOMIC_COUNTERS_EXT: GLenum = 0x92D4;
pub const GL_MAX_TESS_CONTROL_IMAGE_UNIFORMS_EXT: GLenum = 0x90CB;
pub const GL_MAX_TESS_EVALUATION_IMAGE_UNIFORMS_EXT: GLenum = 0x90CC;
pub const GL_MAX_TESS_CONTROL_SHADER_STORAGE_BLOCKS_EXT: GLenum = 0x90D8;
pub const GL_MAX_TESS_EVALUATION_SHADER_STORAGE_BLOCKS_EXT: GLenum = 0x90D9;
pub const GL_PRIMITIVE_RESTART_FOR_PATCHES_SUPPORTED: GLenum = 0x8221;

// Accepted by the {props} parameter of GetProgramResourceiv.
pub const GL_IS_PER_PATCH_EXT: GLenum = 0x92E7;
pub const GL_REFERENCED_BY_TESS_CONTROL_SHADER_EXT: GLenum = 0x9307;
pub const GL_REFERENCED_BY_TESS_EVALUATION_SHADER_EXT: GLenum = 0x9308;

// Accepted by the {type} parameter of CreateShader, by the {pname} parameter
// of GetProgramPipelineiv, and returned by GetShaderiv.
pub const GL_TESS_EVALUATION_SHADER_EXT: GLenum = 0x8E87;
pub const GL_TESS_CONTROL_SHADER_EXT: GLenum = 0x8E88;

// Accepted by the {stages} parameter of UseProgramStages.
pub const GL_TESS_CONTROL_SHADER_BIT_EXT: GLenum = 0x00000008;
pub const GL_TESS_EVALUATION_SHADER_BIT_EXT: GLenum = 0x00000010;

pub type PFNGLPATCHPARAMETERIEXTPROC = unsafe extern "system" fn(pname: GLenum, value: GLint);
