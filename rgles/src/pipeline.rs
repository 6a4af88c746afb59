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

//! GL_EXT_separate_shader_objects wrappers: program pipeline objects and
//! the direct-to-program uniform family.

use std::ffi::CString;

use gles_sys::exts::*;
use gles_sys::{GLboolean, GLchar, GLenum, GLint, GLsizei, GL_INFO_LOG_LENGTH, GL_TRUE};

use crate::context::Gles;
use crate::error::Error;

impl Gles
{
    pub fn gen_program_pipelines(&self, count: usize) -> Result<Vec<u32>, Error>
    {
        let func = self.require(
            self.funcs.glGenProgramPipelinesEXT,
            self.caps.ext_separate_shader_objects,
            EXT_SEPARATE_SHADER_OBJECTS
        )?;
        let mut pipelines = vec![0u32; count];
        unsafe { func(count as GLsizei, pipelines.as_mut_ptr()) };
        Ok(pipelines)
    }

    pub fn delete_program_pipelines(&self, pipelines: &[u32]) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glDeleteProgramPipelinesEXT,
            self.caps.ext_separate_shader_objects,
            EXT_SEPARATE_SHADER_OBJECTS
        )?;
        unsafe { func(pipelines.len() as GLsizei, pipelines.as_ptr()) };
        Ok(())
    }

    pub fn bind_program_pipeline(&self, pipeline: u32) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glBindProgramPipelineEXT,
            self.caps.ext_separate_shader_objects,
            EXT_SEPARATE_SHADER_OBJECTS
        )?;
        unsafe { func(pipeline) };
        Ok(())
    }

    pub fn is_program_pipeline(&self, pipeline: u32) -> Result<bool, Error>
    {
        let func = self.require(
            self.funcs.glIsProgramPipelineEXT,
            self.caps.ext_separate_shader_objects,
            EXT_SEPARATE_SHADER_OBJECTS
        )?;
        Ok(unsafe { func(pipeline) } == GL_TRUE)
    }

    /// Binds {program} to the stages of {stages_bits} (VERTEX_SHADER_BIT_EXT
    /// and friends, or ALL_SHADER_BITS_EXT).
    pub fn use_program_stages(&self, pipeline: u32, stages_bits: u32, program: u32) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glUseProgramStagesEXT,
            self.caps.ext_separate_shader_objects,
            EXT_SEPARATE_SHADER_OBJECTS
        )?;
        unsafe { func(pipeline, stages_bits, program) };
        Ok(())
    }

    /// Selects the program the conventional Uniform* commands update.
    pub fn active_shader_program(&self, pipeline: u32, program: u32) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glActiveShaderProgramEXT,
            self.caps.ext_separate_shader_objects,
            EXT_SEPARATE_SHADER_OBJECTS
        )?;
        unsafe { func(pipeline, program) };
        Ok(())
    }

    /// Marks {program} as linkable into a separable pipeline.
    pub fn program_separable(&self, program: u32, separable: bool) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glProgramParameteriEXT,
            self.caps.ext_separate_shader_objects,
            EXT_SEPARATE_SHADER_OBJECTS
        )?;
        unsafe { func(program, GL_PROGRAM_SEPARABLE_EXT, if separable { 1 } else { 0 }) };
        Ok(())
    }

    /// Compiles and links {sources} into a single-stage separable program.
    /// Interior nul bytes in a source are rejected.
    pub fn create_shader_program(&self, ty: GLenum, sources: &[&str]) -> Result<u32, Error>
    {
        let func = self.require(
            self.funcs.glCreateShaderProgramvEXT,
            self.caps.ext_separate_shader_objects,
            EXT_SEPARATE_SHADER_OBJECTS
        )?;
        let owned: Vec<CString> = sources
            .iter()
            .map(|s| CString::new(*s))
            .collect::<Result<_, _>>()
            .map_err(|_| Error::InteriorNul)?;
        let ptrs: Vec<*const GLchar> = owned.iter().map(|s| s.as_ptr()).collect();
        Ok(unsafe { func(ty, ptrs.len() as GLsizei, ptrs.as_ptr()) })
    }

    pub fn validate_program_pipeline(&self, pipeline: u32) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glValidateProgramPipelineEXT,
            self.caps.ext_separate_shader_objects,
            EXT_SEPARATE_SHADER_OBJECTS
        )?;
        unsafe { func(pipeline) };
        Ok(())
    }

    pub fn program_pipeline_iv(&self, pipeline: u32, pname: GLenum) -> Result<i32, Error>
    {
        let func = self.require(
            self.funcs.glGetProgramPipelineivEXT,
            self.caps.ext_separate_shader_objects,
            EXT_SEPARATE_SHADER_OBJECTS
        )?;
        let mut value: GLint = 0;
        unsafe { func(pipeline, pname, &mut value) };
        Ok(value)
    }

    pub fn program_pipeline_info_log(&self, pipeline: u32) -> Result<String, Error>
    {
        let func = self.require(
            self.funcs.glGetProgramPipelineInfoLogEXT,
            self.caps.ext_separate_shader_objects,
            EXT_SEPARATE_SHADER_OBJECTS
        )?;
        let cap = self.program_pipeline_iv(pipeline, GL_INFO_LOG_LENGTH)?.max(1);
        let mut buf = vec![0u8; cap as usize];
        let mut len: GLsizei = 0;
        unsafe { func(pipeline, cap, &mut len, buf.as_mut_ptr() as *mut GLchar) };
        buf.truncate(len.clamp(0, cap) as usize);
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

// The ProgramUniform family is fully mechanical; one macro arm per shape
// keeps every setter auditable in a single screen.
macro_rules! program_uniform_scalar {
    ($($method:ident => $field:ident($($v:ident : $t:ty),+)),+ $(,)?) => {
        impl Gles
        {
            $(pub fn $method(&self, program: u32, location: i32, $($v: $t),+) -> Result<(), Error>
            {
                let func = self.require(
                    self.funcs.$field,
                    self.caps.ext_separate_shader_objects,
                    EXT_SEPARATE_SHADER_OBJECTS
                )?;
                unsafe { func(program, location, $($v),+) };
                Ok(())
            })+
        }
    };
}

program_uniform_scalar! {
    program_uniform_1f => glProgramUniform1fEXT(v0: f32),
    program_uniform_2f => glProgramUniform2fEXT(v0: f32, v1: f32),
    program_uniform_3f => glProgramUniform3fEXT(v0: f32, v1: f32, v2: f32),
    program_uniform_4f => glProgramUniform4fEXT(v0: f32, v1: f32, v2: f32, v3: f32),
    program_uniform_1i => glProgramUniform1iEXT(v0: i32),
    program_uniform_2i => glProgramUniform2iEXT(v0: i32, v1: i32),
    program_uniform_3i => glProgramUniform3iEXT(v0: i32, v1: i32, v2: i32),
    program_uniform_4i => glProgramUniform4iEXT(v0: i32, v1: i32, v2: i32, v3: i32),
    program_uniform_1ui => glProgramUniform1uiEXT(v0: u32),
    program_uniform_2ui => glProgramUniform2uiEXT(v0: u32, v1: u32),
    program_uniform_3ui => glProgramUniform3uiEXT(v0: u32, v1: u32, v2: u32),
    program_uniform_4ui => glProgramUniform4uiEXT(v0: u32, v1: u32, v2: u32, v3: u32),
}

// Count is derived from the slice length and the component width, the same
// contract the array-form commands document.
macro_rules! program_uniform_slice {
    ($($method:ident => $field:ident($t:ty, $components:literal)),+ $(,)?) => {
        impl Gles
        {
            $(pub fn $method(&self, program: u32, location: i32, values: &[$t]) -> Result<(), Error>
            {
                let func = self.require(
                    self.funcs.$field,
                    self.caps.ext_separate_shader_objects,
                    EXT_SEPARATE_SHADER_OBJECTS
                )?;
                let count = (values.len() / $components) as GLsizei;
                unsafe { func(program, location, count, values.as_ptr()) };
                Ok(())
            })+
        }
    };
}

program_uniform_slice! {
    program_uniform_1fv => glProgramUniform1fvEXT(f32, 1),
    program_uniform_2fv => glProgramUniform2fvEXT(f32, 2),
    program_uniform_3fv => glProgramUniform3fvEXT(f32, 3),
    program_uniform_4fv => glProgramUniform4fvEXT(f32, 4),
    program_uniform_1iv => glProgramUniform1ivEXT(i32, 1),
    program_uniform_2iv => glProgramUniform2ivEXT(i32, 2),
    program_uniform_3iv => glProgramUniform3ivEXT(i32, 3),
    program_uniform_4iv => glProgramUniform4ivEXT(i32, 4),
    program_uniform_1uiv => glProgramUniform1uivEXT(u32, 1),
    program_uniform_2uiv => glProgramUniform2uivEXT(u32, 2),
    program_uniform_3uiv => glProgramUniform3uivEXT(u32, 3),
    program_uniform_4uiv => glProgramUniform4uivEXT(u32, 4),
}

macro_rules! program_uniform_matrix {
    ($($method:ident => $field:ident($elements:literal)),+ $(,)?) => {
        impl Gles
        {
            $(pub fn $method(
                &self,
                program: u32,
                location: i32,
                transpose: bool,
                values: &[f32]
            ) -> Result<(), Error>
            {
                let func = self.require(
                    self.funcs.$field,
                    self.caps.ext_separate_shader_objects,
                    EXT_SEPARATE_SHADER_OBJECTS
                )?;
                let count = (values.len() / $elements) as GLsizei;
                let transpose: GLboolean = if transpose { 1 } else { 0 };
                unsafe { func(program, location, count, transpose, values.as_ptr()) };
                Ok(())
            })+
        }
    };
}

program_uniform_matrix! {
    program_uniform_matrix_2fv => glProgramUniformMatrix2fvEXT(4),
    program_uniform_matrix_3fv => glProgramUniformMatrix3fvEXT(9),
    program_uniform_matrix_4fv => glProgramUniformMatrix4fvEXT(16),
    program_uniform_matrix_2x3fv => glProgramUniformMatrix2x3fvEXT(6),
    program_uniform_matrix_3x2fv => glProgramUniformMatrix3x2fvEXT(6),
    program_uniform_matrix_2x4fv => glProgramUniformMatrix2x4fvEXT(8),
    program_uniform_matrix_4x2fv => glProgramUniformMatrix4x2fvEXT(8),
    program_uniform_matrix_3x4fv => glProgramUniformMatrix3x4fvEXT(12),
    program_uniform_matrix_4x3fv => glProgramUniformMatrix4x3fvEXT(12),
}

#[cfg(test)]
mod tests
{
    use crate::context::tests::stub_gles;
    use crate::error::Error;

    #[test]
    fn pipelines_gate_on_the_extension()
    {
        let gl = stub_gles("", true);
        assert!(matches!(
            gl.gen_program_pipelines(1),
            Err(Error::ExtensionUnavailable("GL_EXT_separate_shader_objects"))
        ));
        assert!(matches!(
            gl.program_uniform_4f(1, 0, 0.0, 0.0, 0.0, 1.0),
            Err(Error::ExtensionUnavailable("GL_EXT_separate_shader_objects"))
        ));
    }

    #[test]
    fn nul_in_shader_source_is_rejected()
    {
        let gl = stub_gles("GL_EXT_separate_shader_objects", true);
        let bad = "void main() {\0}";
        // 0x8B31 is the core VERTEX_SHADER type.
        assert!(matches!(
            gl.create_shader_program(0x8B31, &[bad]),
            Err(Error::InteriorNul)
        ));
    }
}
