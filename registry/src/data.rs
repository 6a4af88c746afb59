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

//! Static catalog data, transcribed from the published extension
//! specifications. Values must stay bit-exact with the registry.

use phf::phf_map;

use crate::{Extension, Token};

const fn tok(name: &'static str, value: u32) -> Token
{
    Token { name, value }
}

const EXT_TESSELLATION_SHADER: Extension = Extension {
    name: "GL_EXT_tessellation_shader",
    tokens: &[
        tok("GL_PATCHES_EXT", 0x000E),
        tok("GL_PATCH_VERTICES_EXT", 0x8E72),
        tok("GL_TESS_CONTROL_OUTPUT_VERTICES_EXT", 0x8E75),
        tok("GL_TESS_GEN_MODE_EXT", 0x8E76),
        tok("GL_TESS_GEN_SPACING_EXT", 0x8E77),
        tok("GL_TESS_GEN_VERTEX_ORDER_EXT", 0x8E78),
        tok("GL_TESS_GEN_POINT_MODE_EXT", 0x8E79),
        tok("GL_ISOLINES_EXT", 0x8E7A),
        tok("GL_QUADS_EXT", 0x0007),
        tok("GL_FRACTIONAL_ODD_EXT", 0x8E7B),
        tok("GL_FRACTIONAL_EVEN_EXT", 0x8E7C),
        tok("GL_MAX_PATCH_VERTICES_EXT", 0x8E7D),
        tok("GL_MAX_TESS_GEN_LEVEL_EXT", 0x8E7E),
        tok("GL_MAX_TESS_CONTROL_UNIFORM_COMPONENTS_EXT", 0x8E7F),
        tok("GL_MAX_TESS_EVALUATION_UNIFORM_COMPONENTS_EXT", 0x8E80),
        tok("GL_MAX_TESS_CONTROL_TEXTURE_IMAGE_UNITS_EXT", 0x8E81),
        tok("GL_MAX_TESS_EVALUATION_TEXTURE_IMAGE_UNITS_EXT", 0x8E82),
        tok("GL_MAX_TESS_CONTROL_OUTPUT_COMPONENTS_EXT", 0x8E83),
        tok("GL_MAX_TESS_PATCH_COMPONENTS_EXT", 0x8E84),
        tok("GL_MAX_TESS_CONTROL_TOTAL_OUTPUT_COMPONENTS_EXT", 0x8E85),
        tok("GL_MAX_TESS_EVALUATION_OUTPUT_COMPONENTS_EXT", 0x8E86),
        tok("GL_MAX_TESS_CONTROL_UNIFORM_BLOCKS_EXT", 0x8E89),
        tok("GL_MAX_TESS_EVALUATION_UNIFORM_BLOCKS_EXT", 0x8E8A),
        tok("GL_MAX_TESS_CONTROL_INPUT_COMPONENTS_EXT", 0x886C),
        tok("GL_MAX_TESS_EVALUATION_INPUT_COMPONENTS_EXT", 0x886D),
        tok("GL_MAX_COMBINED_TESS_CONTROL_UNIFORM_COMPONENTS_EXT", 0x8E1E),
        tok("GL_MAX_COMBINED_TESS_EVALUATION_UNIFORM_COMPONENTS_EXT", 0x8E1F),
        tok("GL_MAX_TESS_CONTROL_ATOMIC_COUNTER_BUFFERS_EXT", 0x92CD),
        tok("GL_MAX_TESS_EVALUATION_ATOMIC_COUNTER_BUFFERS_EXT", 0x92CE),
        tok("GL_MAX_TESS_CONTROL_ATOMIC_COUNTERS_EXT", 0x92D3),
        tok("GL_MAX_TESS_EVALUATION_ATOMIC_COUNTERS_EXT", 0x92D4),
        tok("GL_MAX_TESS_CONTROL_IMAGE_UNIFORMS_EXT", 0x90CB),
        tok("GL_MAX_TESS_EVALUATION_IMAGE_UNIFORMS_EXT", 0x90CC),
        tok("GL_MAX_TESS_CONTROL_SHADER_STORAGE_BLOCKS_EXT", 0x90D8),
        tok("GL_MAX_TESS_EVALUATION_SHADER_STORAGE_BLOCKS_EXT", 0x90D9),
        tok("GL_PRIMITIVE_RESTART_FOR_PATCHES_SUPPORTED", 0x8221),
        tok("GL_IS_PER_PATCH_EXT", 0x92E7),
        tok("GL_REFERENCED_BY_TESS_CONTROL_SHADER_EXT", 0x9307),
        tok("GL_REFERENCED_BY_TESS_EVALUATION_SHADER_EXT", 0x9308),
        tok("GL_TESS_EVALUATION_SHADER_EXT", 0x8E87),
        tok("GL_TESS_CONTROL_SHADER_EXT", 0x8E88),
        tok("GL_TESS_CONTROL_SHADER_BIT_EXT", 0x00000008),
        tok("GL_TESS_EVALUATION_SHADER_BIT_EXT", 0x00000010)
    ],
    commands: &["glPatchParameteriEXT"]
};

const EXT_GEOMETRY_SHADER: Extension = Extension {
    name: "GL_EXT_geometry_shader",
    tokens: &[
        tok("GL_GEOMETRY_SHADER_EXT", 0x8DD9),
        tok("GL_GEOMETRY_SHADER_BIT_EXT", 0x00000004),
        tok("GL_GEOMETRY_LINKED_VERTICES_OUT_EXT", 0x8916),
        tok("GL_GEOMETRY_LINKED_INPUT_TYPE_EXT", 0x8917),
        tok("GL_GEOMETRY_LINKED_OUTPUT_TYPE_EXT", 0x8918),
        tok("GL_GEOMETRY_SHADER_INVOCATIONS_EXT", 0x887F),
        tok("GL_LAYER_PROVOKING_VERTEX_EXT", 0x825E),
        tok("GL_MAX_GEOMETRY_UNIFORM_COMPONENTS_EXT", 0x8DDF),
        tok("GL_MAX_GEOMETRY_UNIFORM_BLOCKS_EXT", 0x8A2C),
        tok("GL_MAX_COMBINED_GEOMETRY_UNIFORM_COMPONENTS_EXT", 0x8A32),
        tok("GL_MAX_GEOMETRY_INPUT_COMPONENTS_EXT", 0x9123),
        tok("GL_MAX_GEOMETRY_OUTPUT_COMPONENTS_EXT", 0x9124),
        tok("GL_MAX_GEOMETRY_OUTPUT_VERTICES_EXT", 0x8DE0),
        tok("GL_MAX_GEOMETRY_TOTAL_OUTPUT_COMPONENTS_EXT", 0x8DE1),
        tok("GL_MAX_GEOMETRY_SHADER_INVOCATIONS_EXT", 0x8E5A),
        tok("GL_MAX_GEOMETRY_TEXTURE_IMAGE_UNITS_EXT", 0x8C29),
        tok("GL_MAX_GEOMETRY_ATOMIC_COUNTER_BUFFERS_EXT", 0x92CF),
        tok("GL_MAX_GEOMETRY_ATOMIC_COUNTERS_EXT", 0x92D5),
        tok("GL_MAX_GEOMETRY_IMAGE_UNIFORMS_EXT", 0x90CD),
        tok("GL_MAX_GEOMETRY_SHADER_STORAGE_BLOCKS_EXT", 0x90D7),
        tok("GL_MAX_FRAMEBUFFER_LAYERS_EXT", 0x9317),
        tok("GL_FIRST_VERTEX_CONVENTION_EXT", 0x8E4D),
        tok("GL_LAST_VERTEX_CONVENTION_EXT", 0x8E4E),
        tok("GL_UNDEFINED_VERTEX_EXT", 0x8260),
        tok("GL_LINES_ADJACENCY_EXT", 0x000A),
        tok("GL_LINE_STRIP_ADJACENCY_EXT", 0x000B),
        tok("GL_TRIANGLES_ADJACENCY_EXT", 0x000C),
        tok("GL_TRIANGLE_STRIP_ADJACENCY_EXT", 0x000D),
        tok("GL_PRIMITIVES_GENERATED_EXT", 0x8C87),
        tok("GL_FRAMEBUFFER_DEFAULT_LAYERS_EXT", 0x9312),
        tok("GL_FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS_EXT", 0x8DA8),
        tok("GL_FRAMEBUFFER_ATTACHMENT_LAYERED_EXT", 0x8DA7),
        tok("GL_REFERENCED_BY_GEOMETRY_SHADER_EXT", 0x9309)
    ],
    commands: &["glFramebufferTextureEXT"]
};

const EXT_SEPARATE_SHADER_OBJECTS: Extension = Extension {
    name: "GL_EXT_separate_shader_objects",
    tokens: &[
        tok("GL_VERTEX_SHADER_BIT_EXT", 0x00000001),
        tok("GL_FRAGMENT_SHADER_BIT_EXT", 0x00000002),
        tok("GL_ALL_SHADER_BITS_EXT", 0xFFFFFFFF),
        tok("GL_PROGRAM_SEPARABLE_EXT", 0x8258),
        tok("GL_ACTIVE_PROGRAM_EXT", 0x8259),
        tok("GL_PROGRAM_PIPELINE_BINDING_EXT", 0x825A)
    ],
    commands: &[
        "glActiveShaderProgramEXT",
        "glBindProgramPipelineEXT",
        "glCreateShaderProgramvEXT",
        "glDeleteProgramPipelinesEXT",
        "glGenProgramPipelinesEXT",
        "glGetProgramPipelineInfoLogEXT",
        "glGetProgramPipelineivEXT",
        "glIsProgramPipelineEXT",
        "glProgramParameteriEXT",
        "glUseProgramStagesEXT",
        "glValidateProgramPipelineEXT",
        "glProgramUniform1fEXT",
        "glProgramUniform2fEXT",
        "glProgramUniform3fEXT",
        "glProgramUniform4fEXT",
        "glProgramUniform1iEXT",
        "glProgramUniform2iEXT",
        "glProgramUniform3iEXT",
        "glProgramUniform4iEXT",
        "glProgramUniform1uiEXT",
        "glProgramUniform2uiEXT",
        "glProgramUniform3uiEXT",
        "glProgramUniform4uiEXT",
        "glProgramUniform1fvEXT",
        "glProgramUniform2fvEXT",
        "glProgramUniform3fvEXT",
        "glProgramUniform4fvEXT",
        "glProgramUniform1ivEXT",
        "glProgramUniform2ivEXT",
        "glProgramUniform3ivEXT",
        "glProgramUniform4ivEXT",
        "glProgramUniform1uivEXT",
        "glProgramUniform2uivEXT",
        "glProgramUniform3uivEXT",
        "glProgramUniform4uivEXT",
        "glProgramUniformMatrix2fvEXT",
        "glProgramUniformMatrix3fvEXT",
        "glProgramUniformMatrix4fvEXT",
        "glProgramUniformMatrix2x3fvEXT",
        "glProgramUniformMatrix3x2fvEXT",
        "glProgramUniformMatrix2x4fvEXT",
        "glProgramUniformMatrix4x2fvEXT",
        "glProgramUniformMatrix3x4fvEXT",
        "glProgramUniformMatrix4x3fvEXT"
    ]
};

const EXT_DEPTH_CLAMP: Extension = Extension {
    name: "GL_EXT_depth_clamp",
    tokens: &[tok("GL_DEPTH_CLAMP_EXT", 0x864F)],
    commands: &[]
};

const KHR_DEBUG: Extension = Extension {
    name: "GL_KHR_debug",
    tokens: &[
        tok("GL_DEBUG_OUTPUT_KHR", 0x92E0),
        tok("GL_DEBUG_OUTPUT_SYNCHRONOUS_KHR", 0x8242),
        tok("GL_CONTEXT_FLAG_DEBUG_BIT_KHR", 0x00000002),
        tok("GL_MAX_DEBUG_GROUP_STACK_DEPTH_KHR", 0x826C),
        tok("GL_DEBUG_GROUP_STACK_DEPTH_KHR", 0x826D),
        tok("GL_MAX_LABEL_LENGTH_KHR", 0x82E8),
        tok("GL_MAX_DEBUG_MESSAGE_LENGTH_KHR", 0x9143),
        tok("GL_MAX_DEBUG_LOGGED_MESSAGES_KHR", 0x9144),
        tok("GL_DEBUG_LOGGED_MESSAGES_KHR", 0x9145),
        tok("GL_DEBUG_NEXT_LOGGED_MESSAGE_LENGTH_KHR", 0x8243),
        tok("GL_DEBUG_CALLBACK_FUNCTION_KHR", 0x8244),
        tok("GL_DEBUG_CALLBACK_USER_PARAM_KHR", 0x8245),
        tok("GL_DEBUG_SOURCE_API_KHR", 0x8246),
        tok("GL_DEBUG_SOURCE_WINDOW_SYSTEM_KHR", 0x8247),
        tok("GL_DEBUG_SOURCE_SHADER_COMPILER_KHR", 0x8248),
        tok("GL_DEBUG_SOURCE_THIRD_PARTY_KHR", 0x8249),
        tok("GL_DEBUG_SOURCE_APPLICATION_KHR", 0x824A),
        tok("GL_DEBUG_SOURCE_OTHER_KHR", 0x824B),
        tok("GL_DEBUG_TYPE_ERROR_KHR", 0x824C),
        tok("GL_DEBUG_TYPE_DEPRECATED_BEHAVIOR_KHR", 0x824D),
        tok("GL_DEBUG_TYPE_UNDEFINED_BEHAVIOR_KHR", 0x824E),
        tok("GL_DEBUG_TYPE_PORTABILITY_KHR", 0x824F),
        tok("GL_DEBUG_TYPE_PERFORMANCE_KHR", 0x8250),
        tok("GL_DEBUG_TYPE_OTHER_KHR", 0x8251),
        tok("GL_DEBUG_TYPE_MARKER_KHR", 0x8268),
        tok("GL_DEBUG_TYPE_PUSH_GROUP_KHR", 0x8269),
        tok("GL_DEBUG_TYPE_POP_GROUP_KHR", 0x826A),
        tok("GL_DEBUG_SEVERITY_HIGH_KHR", 0x9146),
        tok("GL_DEBUG_SEVERITY_MEDIUM_KHR", 0x9147),
        tok("GL_DEBUG_SEVERITY_LOW_KHR", 0x9148),
        tok("GL_DEBUG_SEVERITY_NOTIFICATION_KHR", 0x826B),
        tok("GL_BUFFER_KHR", 0x82E0),
        tok("GL_SHADER_KHR", 0x82E1),
        tok("GL_PROGRAM_KHR", 0x82E2),
        tok("GL_VERTEX_ARRAY_KHR", 0x8074),
        tok("GL_QUERY_KHR", 0x82E3),
        tok("GL_PROGRAM_PIPELINE_KHR", 0x82E4),
        tok("GL_SAMPLER_KHR", 0x82E6),
        tok("GL_STACK_OVERFLOW_KHR", 0x0503),
        tok("GL_STACK_UNDERFLOW_KHR", 0x0504)
    ],
    commands: &[
        "glDebugMessageControlKHR",
        "glDebugMessageInsertKHR",
        "glDebugMessageCallbackKHR",
        "glGetDebugMessageLogKHR",
        "glPushDebugGroupKHR",
        "glPopDebugGroupKHR",
        "glObjectLabelKHR",
        "glGetObjectLabelKHR",
        "glObjectPtrLabelKHR",
        "glGetObjectPtrLabelKHR",
        "glGetPointervKHR"
    ]
};

const KHR_BLEND_EQUATION_ADVANCED: Extension = Extension {
    name: "GL_KHR_blend_equation_advanced",
    tokens: &[
        tok("GL_MULTIPLY_KHR", 0x9294),
        tok("GL_SCREEN_KHR", 0x9295),
        tok("GL_OVERLAY_KHR", 0x9296),
        tok("GL_DARKEN_KHR", 0x9297),
        tok("GL_LIGHTEN_KHR", 0x9298),
        tok("GL_COLORDODGE_KHR", 0x9299),
        tok("GL_COLORBURN_KHR", 0x929A),
        tok("GL_HARDLIGHT_KHR", 0x929B),
        tok("GL_SOFTLIGHT_KHR", 0x929C),
        tok("GL_DIFFERENCE_KHR", 0x929E),
        tok("GL_EXCLUSION_KHR", 0x92A0),
        tok("GL_HSL_HUE_KHR", 0x92AD),
        tok("GL_HSL_SATURATION_KHR", 0x92AE),
        tok("GL_HSL_COLOR_KHR", 0x92AF),
        tok("GL_HSL_LUMINOSITY_KHR", 0x92B0)
    ],
    commands: &["glBlendBarrierKHR"]
};

const OES_VERTEX_ARRAY_OBJECT: Extension = Extension {
    name: "GL_OES_vertex_array_object",
    tokens: &[tok("GL_VERTEX_ARRAY_BINDING_OES", 0x85B5)],
    commands: &[
        "glBindVertexArrayOES",
        "glDeleteVertexArraysOES",
        "glGenVertexArraysOES",
        "glIsVertexArrayOES"
    ]
};

const OES_GET_PROGRAM_BINARY: Extension = Extension {
    name: "GL_OES_get_program_binary",
    tokens: &[
        tok("GL_PROGRAM_BINARY_LENGTH_OES", 0x8741),
        tok("GL_NUM_PROGRAM_BINARY_FORMATS_OES", 0x87FE),
        tok("GL_PROGRAM_BINARY_FORMATS_OES", 0x87FF)
    ],
    commands: &["glGetProgramBinaryOES", "glProgramBinaryOES"]
};

const EXT_DISJOINT_TIMER_QUERY: Extension = Extension {
    name: "GL_EXT_disjoint_timer_query",
    tokens: &[
        tok("GL_QUERY_COUNTER_BITS_EXT", 0x8864),
        tok("GL_CURRENT_QUERY_EXT", 0x8865),
        tok("GL_QUERY_RESULT_EXT", 0x8866),
        tok("GL_QUERY_RESULT_AVAILABLE_EXT", 0x8867),
        tok("GL_TIME_ELAPSED_EXT", 0x88BF),
        tok("GL_TIMESTAMP_EXT", 0x8E28),
        tok("GL_GPU_DISJOINT_EXT", 0x8FBB)
    ],
    commands: &[
        "glGenQueriesEXT",
        "glDeleteQueriesEXT",
        "glIsQueryEXT",
        "glBeginQueryEXT",
        "glEndQueryEXT",
        "glQueryCounterEXT",
        "glGetQueryivEXT",
        "glGetQueryObjectivEXT",
        "glGetQueryObjectuivEXT",
        "glGetQueryObjecti64vEXT",
        "glGetQueryObjectui64vEXT"
    ]
};

const EXT_TEXTURE_FILTER_ANISOTROPIC: Extension = Extension {
    name: "GL_EXT_texture_filter_anisotropic",
    tokens: &[
        tok("GL_TEXTURE_MAX_ANISOTROPY_EXT", 0x84FE),
        tok("GL_MAX_TEXTURE_MAX_ANISOTROPY_EXT", 0x84FF)
    ],
    commands: &[]
};

const EXT_MULTISAMPLED_RENDER_TO_TEXTURE: Extension = Extension {
    name: "GL_EXT_multisampled_render_to_texture",
    tokens: &[
        tok("GL_RENDERBUFFER_SAMPLES_EXT", 0x8CAB),
        tok("GL_FRAMEBUFFER_INCOMPLETE_MULTISAMPLE_EXT", 0x8D56),
        tok("GL_MAX_SAMPLES_EXT", 0x8D57),
        tok("GL_FRAMEBUFFER_ATTACHMENT_TEXTURE_SAMPLES_EXT", 0x8D6C)
    ],
    commands: &[
        "glRenderbufferStorageMultisampleEXT",
        "glFramebufferTexture2DMultisampleEXT"
    ]
};

const EXT_INSTANCED_ARRAYS: Extension = Extension {
    name: "GL_EXT_instanced_arrays",
    tokens: &[tok("GL_VERTEX_ATTRIB_ARRAY_DIVISOR_EXT", 0x88FE)],
    commands: &[
        "glDrawArraysInstancedEXT",
        "glDrawElementsInstancedEXT",
        "glVertexAttribDivisorEXT"
    ]
};

const EXT_DRAW_BUFFERS_INDEXED: Extension = Extension {
    name: "GL_EXT_draw_buffers_indexed",
    tokens: &[],
    commands: &[
        "glEnableiEXT",
        "glDisableiEXT",
        "glBlendEquationiEXT",
        "glBlendEquationSeparateiEXT",
        "glBlendFunciEXT",
        "glBlendFuncSeparateiEXT",
        "glColorMaskiEXT",
        "glIsEnablediEXT"
    ]
};

const EXT_PRIMITIVE_BOUNDING_BOX: Extension = Extension {
    name: "GL_EXT_primitive_bounding_box",
    tokens: &[tok("GL_PRIMITIVE_BOUNDING_BOX_EXT", 0x92BE)],
    commands: &["glPrimitiveBoundingBoxEXT"]
};

const EXT_BUFFER_STORAGE: Extension = Extension {
    name: "GL_EXT_buffer_storage",
    tokens: &[
        tok("GL_MAP_PERSISTENT_BIT_EXT", 0x0040),
        tok("GL_MAP_COHERENT_BIT_EXT", 0x0080),
        tok("GL_DYNAMIC_STORAGE_BIT_EXT", 0x0100),
        tok("GL_CLIENT_STORAGE_BIT_EXT", 0x0200),
        tok("GL_CLIENT_MAPPED_BUFFER_BARRIER_BIT_EXT", 0x00004000),
        tok("GL_BUFFER_IMMUTABLE_STORAGE_EXT", 0x821F),
        tok("GL_BUFFER_STORAGE_FLAGS_EXT", 0x8220)
    ],
    commands: &["glBufferStorageEXT"]
};

const EXT_SRGB: Extension = Extension {
    name: "GL_EXT_sRGB",
    tokens: &[
        tok("GL_SRGB_EXT", 0x8C40),
        tok("GL_SRGB_ALPHA_EXT", 0x8C42),
        tok("GL_SRGB8_ALPHA8_EXT", 0x8C43),
        tok("GL_FRAMEBUFFER_ATTACHMENT_COLOR_ENCODING_EXT", 0x8210)
    ],
    commands: &[]
};

pub static EXTENSIONS: [Extension; 16] = [
    EXT_BUFFER_STORAGE,
    EXT_DEPTH_CLAMP,
    EXT_DISJOINT_TIMER_QUERY,
    EXT_DRAW_BUFFERS_INDEXED,
    EXT_GEOMETRY_SHADER,
    EXT_INSTANCED_ARRAYS,
    EXT_MULTISAMPLED_RENDER_TO_TEXTURE,
    EXT_PRIMITIVE_BOUNDING_BOX,
    EXT_SEPARATE_SHADER_OBJECTS,
    EXT_SRGB,
    EXT_TESSELLATION_SHADER,
    EXT_TEXTURE_FILTER_ANISOTROPIC,
    KHR_BLEND_EQUATION_ADVANCED,
    KHR_DEBUG,
    OES_GET_PROGRAM_BINARY,
    OES_VERTEX_ARRAY_OBJECT
];

pub static BY_NAME: phf::Map<&'static str, &'static Extension> = phf_map! {
    "GL_EXT_buffer_storage" => &EXT_BUFFER_STORAGE,
    "GL_EXT_depth_clamp" => &EXT_DEPTH_CLAMP,
    "GL_EXT_disjoint_timer_query" => &EXT_DISJOINT_TIMER_QUERY,
    "GL_EXT_draw_buffers_indexed" => &EXT_DRAW_BUFFERS_INDEXED,
    "GL_EXT_geometry_shader" => &EXT_GEOMETRY_SHADER,
    "GL_EXT_instanced_arrays" => &EXT_INSTANCED_ARRAYS,
    "GL_EXT_multisampled_render_to_texture" => &EXT_MULTISAMPLED_RENDER_TO_TEXTURE,
    "GL_EXT_primitive_bounding_box" => &EXT_PRIMITIVE_BOUNDING_BOX,
    "GL_EXT_separate_shader_objects" => &EXT_SEPARATE_SHADER_OBJECTS,
    "GL_EXT_sRGB" => &EXT_SRGB,
    "GL_EXT_tessellation_shader" => &EXT_TESSELLATION_SHADER,
    "GL_EXT_texture_filter_anisotropic" => &EXT_TEXTURE_FILTER_ANISOTROPIC,
    "GL_KHR_blend_equation_advanced" => &KHR_BLEND_EQUATION_ADVANCED,
    "GL_KHR_debug" => &KHR_DEBUG,
    "GL_OES_get_program_binary" => &OES_GET_PROGRAM_BINARY,
    "GL_OES_vertex_array_object" => &OES_VERTEX_ARRAY_OBJECT
};

#[cfg(test)]
mod tests
{
    use gles_sys::exts::*;
    use gles_sys::GL_DONT_CARE;

    use super::EXTENSIONS;

    // One entry per bound token; the compiler rejects any name the binding
    // crate does not define, and the assertions reject any value drift.
    macro_rules! sys_value_table {
        ($($name:ident),+ $(,)?) => {
            fn sys_value(name: &str) -> Option<u32> {
                $(if name == stringify!($name) {
                    return Some($name as u32);
                })+
                None
            }
        };
    }

    sys_value_table! {
        GL_ACTIVE_PROGRAM_EXT,
        GL_ALL_SHADER_BITS_EXT,
        GL_BUFFER_IMMUTABLE_STORAGE_EXT,
        GL_BUFFER_KHR,
        GL_BUFFER_STORAGE_FLAGS_EXT,
        GL_CLIENT_MAPPED_BUFFER_BARRIER_BIT_EXT,
        GL_CLIENT_STORAGE_BIT_EXT,
        GL_COLORBURN_KHR,
        GL_COLORDODGE_KHR,
        GL_CONTEXT_FLAG_DEBUG_BIT_KHR,
        GL_CURRENT_QUERY_EXT,
        GL_DARKEN_KHR,
        GL_DEBUG_CALLBACK_FUNCTION_KHR,
        GL_DEBUG_CALLBACK_USER_PARAM_KHR,
        GL_DEBUG_GROUP_STACK_DEPTH_KHR,
        GL_DEBUG_LOGGED_MESSAGES_KHR,
        GL_DEBUG_NEXT_LOGGED_MESSAGE_LENGTH_KHR,
        GL_DEBUG_OUTPUT_KHR,
        GL_DEBUG_OUTPUT_SYNCHRONOUS_KHR,
        GL_DEBUG_SEVERITY_HIGH_KHR,
        GL_DEBUG_SEVERITY_LOW_KHR,
        GL_DEBUG_SEVERITY_MEDIUM_KHR,
        GL_DEBUG_SEVERITY_NOTIFICATION_KHR,
        GL_DEBUG_SOURCE_API_KHR,
        GL_DEBUG_SOURCE_APPLICATION_KHR,
        GL_DEBUG_SOURCE_OTHER_KHR,
        GL_DEBUG_SOURCE_SHADER_COMPILER_KHR,
        GL_DEBUG_SOURCE_THIRD_PARTY_KHR,
        GL_DEBUG_SOURCE_WINDOW_SYSTEM_KHR,
        GL_DEBUG_TYPE_DEPRECATED_BEHAVIOR_KHR,
        GL_DEBUG_TYPE_ERROR_KHR,
        GL_DEBUG_TYPE_MARKER_KHR,
        GL_DEBUG_TYPE_OTHER_KHR,
        GL_DEBUG_TYPE_PERFORMANCE_KHR,
        GL_DEBUG_TYPE_POP_GROUP_KHR,
        GL_DEBUG_TYPE_PORTABILITY_KHR,
        GL_DEBUG_TYPE_PUSH_GROUP_KHR,
        GL_DEBUG_TYPE_UNDEFINED_BEHAVIOR_KHR,
        GL_DEPTH_CLAMP_EXT,
        GL_DIFFERENCE_KHR,
        GL_DYNAMIC_STORAGE_BIT_EXT,
        GL_EXCLUSION_KHR,
        GL_FIRST_VERTEX_CONVENTION_EXT,
        GL_FRACTIONAL_EVEN_EXT,
        GL_FRACTIONAL_ODD_EXT,
        GL_FRAGMENT_SHADER_BIT_EXT,
        GL_FRAMEBUFFER_ATTACHMENT_COLOR_ENCODING_EXT,
        GL_FRAMEBUFFER_ATTACHMENT_LAYERED_EXT,
        GL_FRAMEBUFFER_ATTACHMENT_TEXTURE_SAMPLES_EXT,
        GL_FRAMEBUFFER_DEFAULT_LAYERS_EXT,
        GL_FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS_EXT,
        GL_FRAMEBUFFER_INCOMPLETE_MULTISAMPLE_EXT,
        GL_GEOMETRY_LINKED_INPUT_TYPE_EXT,
        GL_GEOMETRY_LINKED_OUTPUT_TYPE_EXT,
        GL_GEOMETRY_LINKED_VERTICES_OUT_EXT,
        GL_GEOMETRY_SHADER_BIT_EXT,
        GL_GEOMETRY_SHADER_EXT,
        GL_GEOMETRY_SHADER_INVOCATIONS_EXT,
        GL_GPU_DISJOINT_EXT,
        GL_HARDLIGHT_KHR,
        GL_HSL_COLOR_KHR,
        GL_HSL_HUE_KHR,
        GL_HSL_LUMINOSITY_KHR,
        GL_HSL_SATURATION_KHR,
        GL_ISOLINES_EXT,
        GL_IS_PER_PATCH_EXT,
        GL_LAST_VERTEX_CONVENTION_EXT,
        GL_LAYER_PROVOKING_VERTEX_EXT,
        GL_LIGHTEN_KHR,
        GL_LINES_ADJACENCY_EXT,
        GL_LINE_STRIP_ADJACENCY_EXT,
        GL_MAP_COHERENT_BIT_EXT,
        GL_MAP_PERSISTENT_BIT_EXT,
        GL_MAX_COMBINED_GEOMETRY_UNIFORM_COMPONENTS_EXT,
        GL_MAX_COMBINED_TESS_CONTROL_UNIFORM_COMPONENTS_EXT,
        GL_MAX_COMBINED_TESS_EVALUATION_UNIFORM_COMPONENTS_EXT,
        GL_MAX_DEBUG_GROUP_STACK_DEPTH_KHR,
        GL_MAX_DEBUG_LOGGED_MESSAGES_KHR,
        GL_MAX_DEBUG_MESSAGE_LENGTH_KHR,
        GL_MAX_FRAMEBUFFER_LAYERS_EXT,
        GL_MAX_GEOMETRY_ATOMIC_COUNTERS_EXT,
        GL_MAX_GEOMETRY_ATOMIC_COUNTER_BUFFERS_EXT,
        GL_MAX_GEOMETRY_IMAGE_UNIFORMS_EXT,
        GL_MAX_GEOMETRY_INPUT_COMPONENTS_EXT,
        GL_MAX_GEOMETRY_OUTPUT_COMPONENTS_EXT,
        GL_MAX_GEOMETRY_OUTPUT_VERTICES_EXT,
        GL_MAX_GEOMETRY_SHADER_INVOCATIONS_EXT,
        GL_MAX_GEOMETRY_SHADER_STORAGE_BLOCKS_EXT,
        GL_MAX_GEOMETRY_TEXTURE_IMAGE_UNITS_EXT,
        GL_MAX_GEOMETRY_TOTAL_OUTPUT_COMPONENTS_EXT,
        GL_MAX_GEOMETRY_UNIFORM_BLOCKS_EXT,
        GL_MAX_GEOMETRY_UNIFORM_COMPONENTS_EXT,
        GL_MAX_LABEL_LENGTH_KHR,
        GL_MAX_PATCH_VERTICES_EXT,
        GL_MAX_SAMPLES_EXT,
        GL_MAX_TESS_CONTROL_ATOMIC_COUNTERS_EXT,
        GL_MAX_TESS_CONTROL_ATOMIC_COUNTER_BUFFERS_EXT,
        GL_MAX_TESS_CONTROL_IMAGE_UNIFORMS_EXT,
        GL_MAX_TESS_CONTROL_INPUT_COMPONENTS_EXT,
        GL_MAX_TESS_CONTROL_OUTPUT_COMPONENTS_EXT,
        GL_MAX_TESS_CONTROL_SHADER_STORAGE_BLOCKS_EXT,
        GL_MAX_TESS_CONTROL_TEXTURE_IMAGE_UNITS_EXT,
        GL_MAX_TESS_CONTROL_TOTAL_OUTPUT_COMPONENTS_EXT,
        GL_MAX_TESS_CONTROL_UNIFORM_BLOCKS_EXT,
        GL_MAX_TESS_CONTROL_UNIFORM_COMPONENTS_EXT,
        GL_MAX_TESS_EVALUATION_ATOMIC_COUNTERS_EXT,
        GL_MAX_TESS_EVALUATION_ATOMIC_COUNTER_BUFFERS_EXT,
        GL_MAX_TESS_EVALUATION_IMAGE_UNIFORMS_EXT,
        GL_MAX_TESS_EVALUATION_INPUT_COMPONENTS_EXT,
        GL_MAX_TESS_EVALUATION_OUTPUT_COMPONENTS_EXT,
        GL_MAX_TESS_EVALUATION_SHADER_STORAGE_BLOCKS_EXT,
        GL_MAX_TESS_EVALUATION_TEXTURE_IMAGE_UNITS_EXT,
        GL_MAX_TESS_EVALUATION_UNIFORM_BLOCKS_EXT,
        GL_MAX_TESS_EVALUATION_UNIFORM_COMPONENTS_EXT,
        GL_MAX_TESS_GEN_LEVEL_EXT,
        GL_MAX_TESS_PATCH_COMPONENTS_EXT,
        GL_MAX_TEXTURE_MAX_ANISOTROPY_EXT,
        GL_MULTIPLY_KHR,
        GL_NUM_PROGRAM_BINARY_FORMATS_OES,
        GL_OVERLAY_KHR,
        GL_PATCHES_EXT,
        GL_PATCH_VERTICES_EXT,
        GL_PRIMITIVES_GENERATED_EXT,
        GL_PRIMITIVE_BOUNDING_BOX_EXT,
        GL_PRIMITIVE_RESTART_FOR_PATCHES_SUPPORTED,
        GL_PROGRAM_BINARY_FORMATS_OES,
        GL_PROGRAM_BINARY_LENGTH_OES,
        GL_PROGRAM_KHR,
        GL_PROGRAM_PIPELINE_BINDING_EXT,
        GL_PROGRAM_PIPELINE_KHR,
        GL_PROGRAM_SEPARABLE_EXT,
        GL_QUADS_EXT,
        GL_QUERY_COUNTER_BITS_EXT,
        GL_QUERY_KHR,
        GL_QUERY_RESULT_AVAILABLE_EXT,
        GL_QUERY_RESULT_EXT,
        GL_REFERENCED_BY_GEOMETRY_SHADER_EXT,
        GL_REFERENCED_BY_TESS_CONTROL_SHADER_EXT,
        GL_REFERENCED_BY_TESS_EVALUATION_SHADER_EXT,
        GL_RENDERBUFFER_SAMPLES_EXT,
        GL_SAMPLER_KHR,
        GL_SCREEN_KHR,
        GL_SHADER_KHR,
        GL_SOFTLIGHT_KHR,
        GL_SRGB8_ALPHA8_EXT,
        GL_SRGB_ALPHA_EXT,
        GL_SRGB_EXT,
        GL_STACK_OVERFLOW_KHR,
        GL_STACK_UNDERFLOW_KHR,
        GL_TESS_CONTROL_OUTPUT_VERTICES_EXT,
        GL_TESS_CONTROL_SHADER_BIT_EXT,
        GL_TESS_CONTROL_SHADER_EXT,
        GL_TESS_EVALUATION_SHADER_BIT_EXT,
        GL_TESS_EVALUATION_SHADER_EXT,
        GL_TESS_GEN_MODE_EXT,
        GL_TESS_GEN_POINT_MODE_EXT,
        GL_TESS_GEN_SPACING_EXT,
        GL_TESS_GEN_VERTEX_ORDER_EXT,
        GL_TEXTURE_MAX_ANISOTROPY_EXT,
        GL_TIMESTAMP_EXT,
        GL_TIME_ELAPSED_EXT,
        GL_TRIANGLES_ADJACENCY_EXT,
        GL_TRIANGLE_STRIP_ADJACENCY_EXT,
        GL_UNDEFINED_VERTEX_EXT,
        GL_VERTEX_ARRAY_BINDING_OES,
        GL_VERTEX_ARRAY_KHR,
        GL_VERTEX_ATTRIB_ARRAY_DIVISOR_EXT,
        GL_VERTEX_SHADER_BIT_EXT,
    }

    #[test]
    fn registry_matches_the_binding_constants()
    {
        let mut checked = 0;
        for ext in &EXTENSIONS {
            for tok in ext.tokens {
                let value = sys_value(tok.name)
                    .unwrap_or_else(|| panic!("{} is not bound by gles-sys", tok.name));
                assert_eq!(
                    value, tok.value,
                    "{} differs between the registry and the bindings",
                    tok.name
                );
                checked += 1;
            }
        }
        assert_eq!(checked, 168);
    }

    #[test]
    fn dont_care_is_not_an_extension_token()
    {
        // Core filter value used by DebugMessageControlKHR; it must not be
        // listed as extension data.
        assert!(crate::tokens_by_value(GL_DONT_CARE).is_empty());
    }
}
