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

//! Resolved entry point table. Field names are the exact driver symbol
//! names; a field is None when the driver does not export the symbol.

use std::mem::transmute;
use std::os::raw::c_void;

use crate::exts::*;
use crate::{
    PFNGLGETERRORPROC,
    PFNGLGETINTEGERVPROC,
    PFNGLGETPROGRAMIVPROC,
    PFNGLGETSTRINGIPROC,
    PFNGLGETSTRINGPROC
};

// Declares the table and its loader in one go so a symbol can never be
// listed in one but not the other.
macro_rules! function_table {
    ($($field:ident : $proc:ty),+ $(,)?) => {
        pub struct GlesExtFunctions
        {
            $(pub $field: Option<$proc>,)+
        }

        impl GlesExtFunctions
        {
            /// Resolves every symbol through {lookup}. A null pointer loads
            /// as None; no policy is applied at this layer.
            pub unsafe fn load<F: FnMut(&str) -> *const c_void>(mut lookup: F) -> GlesExtFunctions
            {
                GlesExtFunctions {
                    $($field: {
                        let ptr = lookup(stringify!($field));
                        if ptr.is_null() {
                            None
                        } else {
                            Some(transmute::<*const c_void, $proc>(ptr))
                        }
                    },)+
                }
            }
        }
    };
}

function_table! {
    // Core entry points the capability builder depends on.
    glGetError: PFNGLGETERRORPROC,
    glGetString: PFNGLGETSTRINGPROC,
    glGetStringi: PFNGLGETSTRINGIPROC,
    glGetIntegerv: PFNGLGETINTEGERVPROC,
    glGetProgramiv: PFNGLGETPROGRAMIVPROC,

    // GL_EXT_tessellation_shader
    glPatchParameteriEXT: PFNGLPATCHPARAMETERIEXTPROC,

    // GL_EXT_geometry_shader
    glFramebufferTextureEXT: PFNGLFRAMEBUFFERTEXTUREEXTPROC,

    // GL_EXT_separate_shader_objects
    glActiveShaderProgramEXT: PFNGLACTIVESHADERPROGRAMEXTPROC,
    glBindProgramPipelineEXT: PFNGLBINDPROGRAMPIPELINEEXTPROC,
    glCreateShaderProgramvEXT: PFNGLCREATESHADERPROGRAMVEXTPROC,
    glDeleteProgramPipelinesEXT: PFNGLDELETEPROGRAMPIPELINESEXTPROC,
    glGenProgramPipelinesEXT: PFNGLGENPROGRAMPIPELINESEXTPROC,
    glGetProgramPipelineInfoLogEXT: PFNGLGETPROGRAMPIPELINEINFOLOGEXTPROC,
    glGetProgramPipelineivEXT: PFNGLGETPROGRAMPIPELINEIVEXTPROC,
    glIsProgramPipelineEXT: PFNGLISPROGRAMPIPELINEEXTPROC,
    glProgramParameteriEXT: PFNGLPROGRAMPARAMETERIEXTPROC,
    glUseProgramStagesEXT: PFNGLUSEPROGRAMSTAGESEXTPROC,
    glValidateProgramPipelineEXT: PFNGLVALIDATEPROGRAMPIPELINEEXTPROC,
    glProgramUniform1fEXT: PFNGLPROGRAMUNIFORM1FEXTPROC,
    glProgramUniform2fEXT: PFNGLPROGRAMUNIFORM2FEXTPROC,
    glProgramUniform3fEXT: PFNGLPROGRAMUNIFORM3FEXTPROC,
    glProgramUniform4fEXT: PFNGLPROGRAMUNIFORM4FEXTPROC,
    glProgramUniform1iEXT: PFNGLPROGRAMUNIFORM1IEXTPROC,
    glProgramUniform2iEXT: PFNGLPROGRAMUNIFORM2IEXTPROC,
    glProgramUniform3iEXT: PFNGLPROGRAMUNIFORM3IEXTPROC,
    glProgramUniform4iEXT: PFNGLPROGRAMUNIFORM4IEXTPROC,
    glProgramUniform1uiEXT: PFNGLPROGRAMUNIFORM1UIEXTPROC,
    glProgramUniform2uiEXT: PFNGLPROGRAMUNIFORM2UIEXTPROC,
    glProgramUniform3uiEXT: PFNGLPROGRAMUNIFORM3UIEXTPROC,
    glProgramUniform4uiEXT: PFNGLPROGRAMUNIFORM4UIEXTPROC,
    glProgramUniform1fvEXT: PFNGLPROGRAMUNIFORM1FVEXTPROC,
    glProgramUniform2fvEXT: PFNGLPROGRAMUNIFORM2FVEXTPROC,
    glProgramUniform3fvEXT: PFNGLPROGRAMUNIFORM3FVEXTPROC,
    glProgramUniform4fvEXT: PFNGLPROGRAMUNIFORM4FVEXTPROC,
    glProgramUniform1ivEXT: PFNGLPROGRAMUNIFORM1IVEXTPROC,
    glProgramUniform2ivEXT: PFNGLPROGRAMUNIFORM2IVEXTPROC,
    glProgramUniform3ivEXT: PFNGLPROGRAMUNIFORM3IVEXTPROC,
    glProgramUniform4ivEXT: PFNGLPROGRAMUNIFORM4IVEXTPROC,
    glProgramUniform1uivEXT: PFNGLPROGRAMUNIFORM1UIVEXTPROC,
    glProgramUniform2uivEXT: PFNGLPROGRAMUNIFORM2UIVEXTPROC,
    glProgramUniform3uivEXT: PFNGLPROGRAMUNIFORM3UIVEXTPROC,
    glProgramUniform4uivEXT: PFNGLPROGRAMUNIFORM4UIVEXTPROC,
    glProgramUniformMatrix2fvEXT: PFNGLPROGRAMUNIFORMMATRIX2FVEXTPROC,
    glProgramUniformMatrix3fvEXT: PFNGLPROGRAMUNIFORMMATRIX3FVEXTPROC,
    glProgramUniformMatrix4fvEXT: PFNGLPROGRAMUNIFORMMATRIX4FVEXTPROC,
    glProgramUniformMatrix2x3fvEXT: PFNGLPROGRAMUNIFORMMATRIX2X3FVEXTPROC,
    glProgramUniformMatrix3x2fvEXT: PFNGLPROGRAMUNIFORMMATRIX3X2FVEXTPROC,
    glProgramUniformMatrix2x4fvEXT: PFNGLPROGRAMUNIFORMMATRIX2X4FVEXTPROC,
    glProgramUniformMatrix4x2fvEXT: PFNGLPROGRAMUNIFORMMATRIX4X2FVEXTPROC,
    glProgramUniformMatrix3x4fvEXT: PFNGLPROGRAMUNIFORMMATRIX3X4FVEXTPROC,
    glProgramUniformMatrix4x3fvEXT: PFNGLPROGRAMUNIFORMMATRIX4X3FVEXTPROC,

    // GL_KHR_debug
    glDebugMessageControlKHR: PFNGLDEBUGMESSAGECONTROLKHRPROC,
    glDebugMessageInsertKHR: PFNGLDEBUGMESSAGEINSERTKHRPROC,
    glDebugMessageCallbackKHR: PFNGLDEBUGMESSAGECALLBACKKHRPROC,
    glGetDebugMessageLogKHR: PFNGLGETDEBUGMESSAGELOGKHRPROC,
    glPushDebugGroupKHR: PFNGLPUSHDEBUGGROUPKHRPROC,
    glPopDebugGroupKHR: PFNGLPOPDEBUGGROUPKHRPROC,
    glObjectLabelKHR: PFNGLOBJECTLABELKHRPROC,
    glGetObjectLabelKHR: PFNGLGETOBJECTLABELKHRPROC,
    glObjectPtrLabelKHR: PFNGLOBJECTPTRLABELKHRPROC,
    glGetObjectPtrLabelKHR: PFNGLGETOBJECTPTRLABELKHRPROC,
    glGetPointervKHR: PFNGLGETPOINTERVKHRPROC,

    // GL_KHR_blend_equation_advanced
    glBlendBarrierKHR: PFNGLBLENDBARRIERKHRPROC,

    // GL_OES_vertex_array_object
    glBindVertexArrayOES: PFNGLBINDVERTEXARRAYOESPROC,
    glDeleteVertexArraysOES: PFNGLDELETEVERTEXARRAYSOESPROC,
    glGenVertexArraysOES: PFNGLGENVERTEXARRAYSOESPROC,
    glIsVertexArrayOES: PFNGLISVERTEXARRAYOESPROC,

    // GL_OES_get_program_binary
    glGetProgramBinaryOES: PFNGLGETPROGRAMBINARYOESPROC,
    glProgramBinaryOES: PFNGLPROGRAMBINARYOESPROC,

    // GL_EXT_disjoint_timer_query
    glGenQueriesEXT: PFNGLGENQUERIESEXTPROC,
    glDeleteQueriesEXT: PFNGLDELETEQUERIESEXTPROC,
    glIsQueryEXT: PFNGLISQUERYEXTPROC,
    glBeginQueryEXT: PFNGLBEGINQUERYEXTPROC,
    glEndQueryEXT: PFNGLENDQUERYEXTPROC,
    glQueryCounterEXT: PFNGLQUERYCOUNTEREXTPROC,
    glGetQueryivEXT: PFNGLGETQUERYIVEXTPROC,
    glGetQueryObjectivEXT: PFNGLGETQUERYOBJECTIVEXTPROC,
    glGetQueryObjectuivEXT: PFNGLGETQUERYOBJECTUIVEXTPROC,
    glGetQueryObjecti64vEXT: PFNGLGETQUERYOBJECTI64VEXTPROC,
    glGetQueryObjectui64vEXT: PFNGLGETQUERYOBJECTUI64VEXTPROC,

    // GL_EXT_multisampled_render_to_texture
    glRenderbufferStorageMultisampleEXT: PFNGLRENDERBUFFERSTORAGEMULTISAMPLEEXTPROC,
    glFramebufferTexture2DMultisampleEXT: PFNGLFRAMEBUFFERTEXTURE2DMULTISAMPLEEXTPROC,

    // GL_EXT_instanced_arrays
    glDrawArraysInstancedEXT: PFNGLDRAWARRAYSINSTANCEDEXTPROC,
    glDrawElementsInstancedEXT: PFNGLDRAWELEMENTSINSTANCEDEXTPROC,
    glVertexAttribDivisorEXT: PFNGLVERTEXATTRIBDIVISOREXTPROC,

    // GL_EXT_draw_buffers_indexed
    glEnableiEXT: PFNGLENABLEIEXTPROC,
    glDisableiEXT: PFNGLDISABLEIEXTPROC,
    glBlendEquationiEXT: PFNGLBLENDEQUATIONIEXTPROC,
    glBlendEquationSeparateiEXT: PFNGLBLENDEQUATIONSEPARATEIEXTPROC,
    glBlendFunciEXT: PFNGLBLENDFUNCIEXTPROC,
    glBlendFuncSeparateiEXT: PFNGLBLENDFUNCSEPARATEIEXTPROC,
    glColorMaskiEXT: PFNGLCOLORMASKIEXTPROC,
    glIsEnablediEXT: PFNGLISENABLEDIEXTPROC,

    // GL_EXT_primitive_bounding_box
    glPrimitiveBoundingBoxEXT: PFNGLPRIMITIVEBOUNDINGBOXEXTPROC,

    // GL_EXT_buffer_storage
    glBufferStorageEXT: PFNGLBUFFERSTORAGEEXTPROC,
}

#[cfg(test)]
mod tests
{
    use super::*;

    unsafe extern "system" fn stub_get_error() -> crate::GLenum
    {
        crate::GL_NO_ERROR
    }

    #[test]
    fn null_pointers_load_as_none()
    {
        let funcs = unsafe { GlesExtFunctions::load(|_| std::ptr::null()) };
        assert!(funcs.glGetError.is_none());
        assert!(funcs.glPatchParameteriEXT.is_none());
        assert!(funcs.glBufferStorageEXT.is_none());
    }

    #[test]
    fn symbols_resolve_by_name()
    {
        let mut requested = Vec::new();
        let funcs = unsafe {
            GlesExtFunctions::load(|name| {
                requested.push(name.to_owned());
                if name == "glGetError" {
                    stub_get_error as *const std::os::raw::c_void
                } else {
                    std::ptr::null()
                }
            })
        };
        assert!(funcs.glGetError.is_some());
        assert!(funcs.glBlendBarrierKHR.is_none());
        // The loader asks for driver symbol names, not Rust identifiers.
        assert!(requested.iter().any(|n| n == "glProgramUniformMatrix4x3fvEXT"));
        assert!(requested.iter().any(|n| n == "glGetStringi"));
        assert_eq!(unsafe { (funcs.glGetError.unwrap())() }, crate::GL_NO_ERROR);
    }
}
