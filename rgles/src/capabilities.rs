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

use gles_sys::exts::*;
use gles_sys::functions::GlesExtFunctions;
use log::warn;

use crate::extensions::ExtensionSet;

/// One flag per bound extension. A flag is set only when the driver both
/// advertises the extension and exports every entry point it defines.
#[derive(Clone, Debug, Default)]
pub struct Capabilities
{
    pub ext_buffer_storage: bool,
    pub ext_depth_clamp: bool,
    pub ext_disjoint_timer_query: bool,
    pub ext_draw_buffers_indexed: bool,
    pub ext_geometry_shader: bool,
    pub ext_instanced_arrays: bool,
    pub ext_multisampled_render_to_texture: bool,
    pub ext_primitive_bounding_box: bool,
    pub ext_separate_shader_objects: bool,
    pub ext_srgb: bool,
    pub ext_tessellation_shader: bool,
    pub ext_texture_filter_anisotropic: bool,
    pub khr_blend_equation_advanced: bool,
    pub khr_debug: bool,
    pub oes_get_program_binary: bool,
    pub oes_vertex_array_object: bool,
    extensions: ExtensionSet
}

fn check(set: &ExtensionSet, name: &'static str, entry_points: &[bool]) -> bool
{
    if !set.contains(name) {
        return false;
    }
    let missing = entry_points.iter().filter(|present| !**present).count();
    if missing > 0 {
        warn!("{} is advertised but {} of its entry point(s) did not resolve", name, missing);
        return false;
    }
    true
}

impl Capabilities
{
    pub fn new(set: ExtensionSet, funcs: &GlesExtFunctions) -> Capabilities
    {
        let ext_separate_shader_objects = check(&set, EXT_SEPARATE_SHADER_OBJECTS, &[
            funcs.glActiveShaderProgramEXT.is_some(),
            funcs.glBindProgramPipelineEXT.is_some(),
            funcs.glCreateShaderProgramvEXT.is_some(),
            funcs.glDeleteProgramPipelinesEXT.is_some(),
            funcs.glGenProgramPipelinesEXT.is_some(),
            funcs.glGetProgramPipelineInfoLogEXT.is_some(),
            funcs.glGetProgramPipelineivEXT.is_some(),
            funcs.glIsProgramPipelineEXT.is_some(),
            funcs.glProgramParameteriEXT.is_some(),
            funcs.glUseProgramStagesEXT.is_some(),
            funcs.glValidateProgramPipelineEXT.is_some(),
            funcs.glProgramUniform1fEXT.is_some(),
            funcs.glProgramUniform2fEXT.is_some(),
            funcs.glProgramUniform3fEXT.is_some(),
            funcs.glProgramUniform4fEXT.is_some(),
            funcs.glProgramUniform1iEXT.is_some(),
            funcs.glProgramUniform2iEXT.is_some(),
            funcs.glProgramUniform3iEXT.is_some(),
            funcs.glProgramUniform4iEXT.is_some(),
            funcs.glProgramUniform1uiEXT.is_some(),
            funcs.glProgramUniform2uiEXT.is_some(),
            funcs.glProgramUniform3uiEXT.is_some(),
            funcs.glProgramUniform4uiEXT.is_some(),
            funcs.glProgramUniform1fvEXT.is_some(),
            funcs.glProgramUniform2fvEXT.is_some(),
            funcs.glProgramUniform3fvEXT.is_some(),
            funcs.glProgramUniform4fvEXT.is_some(),
            funcs.glProgramUniform1ivEXT.is_some(),
            funcs.glProgramUniform2ivEXT.is_some(),
            funcs.glProgramUniform3ivEXT.is_some(),
            funcs.glProgramUniform4ivEXT.is_some(),
            funcs.glProgramUniform1uivEXT.is_some(),
            funcs.glProgramUniform2uivEXT.is_some(),
            funcs.glProgramUniform3uivEXT.is_some(),
            funcs.glProgramUniform4uivEXT.is_some(),
            funcs.glProgramUniformMatrix2fvEXT.is_some(),
            funcs.glProgramUniformMatrix3fvEXT.is_some(),
            funcs.glProgramUniformMatrix4fvEXT.is_some(),
            funcs.glProgramUniformMatrix2x3fvEXT.is_some(),
            funcs.glProgramUniformMatrix3x2fvEXT.is_some(),
            funcs.glProgramUniformMatrix2x4fvEXT.is_some(),
            funcs.glProgramUniformMatrix4x2fvEXT.is_some(),
            funcs.glProgramUniformMatrix3x4fvEXT.is_some(),
            funcs.glProgramUniformMatrix4x3fvEXT.is_some()
        ]);
        let khr_debug = check(&set, KHR_DEBUG, &[
            funcs.glDebugMessageControlKHR.is_some(),
            funcs.glDebugMessageInsertKHR.is_some(),
            funcs.glDebugMessageCallbackKHR.is_some(),
            funcs.glGetDebugMessageLogKHR.is_some(),
            funcs.glPushDebugGroupKHR.is_some(),
            funcs.glPopDebugGroupKHR.is_some(),
            funcs.glObjectLabelKHR.is_some(),
            funcs.glGetObjectLabelKHR.is_some(),
            funcs.glObjectPtrLabelKHR.is_some(),
            funcs.glGetObjectPtrLabelKHR.is_some(),
            funcs.glGetPointervKHR.is_some()
        ]);
        let ext_disjoint_timer_query = check(&set, EXT_DISJOINT_TIMER_QUERY, &[
            funcs.glGenQueriesEXT.is_some(),
            funcs.glDeleteQueriesEXT.is_some(),
            funcs.glIsQueryEXT.is_some(),
            funcs.glBeginQueryEXT.is_some(),
            funcs.glEndQueryEXT.is_some(),
            funcs.glQueryCounterEXT.is_some(),
            funcs.glGetQueryivEXT.is_some(),
            funcs.glGetQueryObjectivEXT.is_some(),
            funcs.glGetQueryObjectuivEXT.is_some(),
            funcs.glGetQueryObjecti64vEXT.is_some(),
            funcs.glGetQueryObjectui64vEXT.is_some()
        ]);
        let ext_draw_buffers_indexed = check(&set, EXT_DRAW_BUFFERS_INDEXED, &[
            funcs.glEnableiEXT.is_some(),
            funcs.glDisableiEXT.is_some(),
            funcs.glBlendEquationiEXT.is_some(),
            funcs.glBlendEquationSeparateiEXT.is_some(),
            funcs.glBlendFunciEXT.is_some(),
            funcs.glBlendFuncSeparateiEXT.is_some(),
            funcs.glColorMaskiEXT.is_some(),
            funcs.glIsEnablediEXT.is_some()
        ]);
        Capabilities {
            ext_buffer_storage: check(&set, EXT_BUFFER_STORAGE, &[
                funcs.glBufferStorageEXT.is_some()
            ]),
            // Constants-only extensions are flagged from the advertisement
            // alone.
            ext_depth_clamp: check(&set, EXT_DEPTH_CLAMP, &[]),
            ext_disjoint_timer_query,
            ext_draw_buffers_indexed,
            ext_geometry_shader: check(&set, EXT_GEOMETRY_SHADER, &[
                funcs.glFramebufferTextureEXT.is_some()
            ]),
            ext_instanced_arrays: check(&set, EXT_INSTANCED_ARRAYS, &[
                funcs.glDrawArraysInstancedEXT.is_some(),
                funcs.glDrawElementsInstancedEXT.is_some(),
                funcs.glVertexAttribDivisorEXT.is_some()
            ]),
            ext_multisampled_render_to_texture: check(&set, EXT_MULTISAMPLED_RENDER_TO_TEXTURE, &[
                funcs.glRenderbufferStorageMultisampleEXT.is_some(),
                funcs.glFramebufferTexture2DMultisampleEXT.is_some()
            ]),
            ext_primitive_bounding_box: check(&set, EXT_PRIMITIVE_BOUNDING_BOX, &[
                funcs.glPrimitiveBoundingBoxEXT.is_some()
            ]),
            ext_separate_shader_objects,
            ext_srgb: check(&set, EXT_SRGB, &[]),
            ext_tessellation_shader: check(&set, EXT_TESSELLATION_SHADER, &[
                funcs.glPatchParameteriEXT.is_some()
            ]),
            ext_texture_filter_anisotropic: check(&set, EXT_TEXTURE_FILTER_ANISOTROPIC, &[]),
            khr_blend_equation_advanced: check(&set, KHR_BLEND_EQUATION_ADVANCED, &[
                funcs.glBlendBarrierKHR.is_some()
            ]),
            khr_debug,
            oes_get_program_binary: check(&set, OES_GET_PROGRAM_BINARY, &[
                funcs.glGetProgramBinaryOES.is_some(),
                funcs.glProgramBinaryOES.is_some()
            ]),
            oes_vertex_array_object: check(&set, OES_VERTEX_ARRAY_OBJECT, &[
                funcs.glBindVertexArrayOES.is_some(),
                funcs.glDeleteVertexArraysOES.is_some(),
                funcs.glGenVertexArraysOES.is_some(),
                funcs.glIsVertexArrayOES.is_some()
            ]),
            extensions: set
        }
    }

    /// Raw advertisement query, usable for extensions this crate does not
    /// bind.
    pub fn supported(&self, name: &str) -> bool
    {
        self.extensions.contains(name)
    }

    pub fn extensions(&self) -> &ExtensionSet
    {
        &self.extensions
    }
}

#[cfg(test)]
mod tests
{
    use gles_sys::functions::GlesExtFunctions;

    use super::*;

    unsafe extern "system" fn stub() {}

    fn resolve_all() -> GlesExtFunctions
    {
        unsafe { GlesExtFunctions::load(|_| stub as *const std::os::raw::c_void) }
    }

    fn resolve_none() -> GlesExtFunctions
    {
        unsafe { GlesExtFunctions::load(|_| std::ptr::null()) }
    }

    #[test]
    fn advertised_and_resolved()
    {
        let set = ExtensionSet::from_list("GL_EXT_tessellation_shader GL_KHR_debug");
        let caps = Capabilities::new(set, &resolve_all());
        assert!(caps.ext_tessellation_shader);
        assert!(caps.khr_debug);
        assert!(!caps.ext_geometry_shader);
        assert!(!caps.oes_vertex_array_object);
    }

    #[test]
    fn advertised_but_unresolved_reports_false()
    {
        let set = ExtensionSet::from_list("GL_EXT_tessellation_shader");
        let caps = Capabilities::new(set, &resolve_none());
        assert!(!caps.ext_tessellation_shader);
    }

    #[test]
    fn constants_only_needs_no_entry_points()
    {
        let set = ExtensionSet::from_list("GL_EXT_sRGB GL_EXT_depth_clamp");
        let caps = Capabilities::new(set, &resolve_none());
        assert!(caps.ext_srgb);
        assert!(caps.ext_depth_clamp);
        assert!(caps.supported("GL_EXT_sRGB"));
        assert!(!caps.supported("GL_EXT_buffer_storage"));
    }

    #[test]
    fn unadvertised_is_false_even_when_resolved()
    {
        let caps = Capabilities::new(ExtensionSet::default(), &resolve_all());
        assert!(!caps.ext_separate_shader_objects);
        assert!(!caps.khr_blend_equation_advanced);
    }

    // Every command the registry lists for an extension must be a symbol
    // the function table asks the driver for.
    #[test]
    fn registry_commands_are_all_loaded()
    {
        let mut requested = std::collections::HashSet::new();
        unsafe {
            GlesExtFunctions::load(|name| {
                requested.insert(name.to_owned());
                std::ptr::null()
            })
        };
        for ext in gles_registry::extensions() {
            for cmd in ext.commands {
                assert!(requested.contains(*cmd), "{} is not in the function table", cmd);
            }
        }
    }
}
