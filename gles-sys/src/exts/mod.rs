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

//! One module per bound extension. Token values and entry point signatures
//! are transcribed from the Khronos registry and must stay bit-exact with it.

pub mod ext_buffer_storage;
pub mod ext_depth_clamp;
pub mod ext_disjoint_timer_query;
pub mod ext_draw_buffers_indexed;
pub mod ext_geometry_shader;
pub mod ext_instanced_arrays;
pub mod ext_multisampled_render_to_texture;
pub mod ext_primitive_bounding_box;
pub mod ext_separate_shader_objects;
pub mod ext_srgb;
pub mod ext_tessellation_shader;
pub mod ext_texture_filter_anisotropic;
pub mod khr_blend_equation_advanced;
pub mod khr_debug;
pub mod oes_get_program_binary;
pub mod oes_vertex_array_object;

pub use ext_buffer_storage::*;
pub use ext_depth_clamp::*;
pub use ext_disjoint_timer_query::*;
pub use ext_draw_buffers_indexed::*;
pub use ext_geometry_shader::*;
pub use ext_instanced_arrays::*;
pub use ext_multisampled_render_to_texture::*;
pub use ext_primitive_bounding_box::*;
pub use ext_separate_shader_objects::*;
pub use ext_srgb::*;
pub use ext_tessellation_shader::*;
pub use ext_texture_filter_anisotropic::*;
pub use khr_blend_equation_advanced::*;
pub use khr_debug::*;
pub use oes_get_program_binary::*;
pub use oes_vertex_array_object::*;
