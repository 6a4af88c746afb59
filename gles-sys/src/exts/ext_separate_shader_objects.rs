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

//! GL_EXT_separate_shader_objects
//!
//! Program pipeline objects mixing independently linked vertex and fragment
//! programs, plus direct-to-program uniform updates.

use crate::{GLbitfield, GLboolean, GLchar, GLenum, GLfloat, GLint, GLsizei, GLuint};

pub const EXT_SEPARATE_SHADER_OBJECTS: &str = "GL_EXT_separate_shader_objects";

// Accepted by the {stages} parameter of UseProgramStagesEXT.
pub const GL_VERTEX_SHADER_BIT_EXT: GLbitfield = 0x00000001;
pub const GL_FRAGMENT_SHADER_BIT_EXT: GLbitfield = 0x00000002;
pub const GL_ALL_SHADER_BITS_EXT: GLbitfield = 0xFFFFFFFF;

// Accepted by the {pname} parameter of ProgramParameteriEXT and GetProgramiv.
pub const GL_PROGRAM_SEPARABLE_EXT: GLenum = 0x8258;

// Accepted by the {type} parameter of GetProgramPipelineivEXT.
pub const GL_ACTIVE_PROGRAM_EXT: GLenum = 0x8259;

// Accepted by the {pname} parameter of GetBooleanv, GetIntegerv and GetFloatv.
pub const GL_PROGRAM_PIPELINE_BINDING_EXT: GLenum = 0x825A;

pub type PFNGLACTIVESHADERPROGRAMEXTPROC = unsafe extern "system" fn(pipeline: GLuint, program: GLuint);
pub type PFNGLBINDPROGRAMPIPELINEEXTPROC = unsafe extern "system" fn(pipeline: GLuint);
pub type PFNGLCREATESHADERPROGRAMVEXTPROC =
    unsafe extern "system" fn(ty: GLenum, count: GLsizei, strings: *const *const GLchar) -> GLuint;
pub type PFNGLDELETEPROGRAMPIPELINESEXTPROC = unsafe extern "system" fn(n: GLsizei, pipelines: *const GLuint);
pub type PFNGLGENPROGRAMPIPELINESEXTPROC = unsafe extern "system" fn(n: GLsizei, pipelines: *mut GLuint);
pub type PFNGLGETPROGRAMPIPELINEINFOLOGEXTPROC = unsafe extern "system" fn(
    pipeline: GLuint,
    bufSize: GLsizei,
    length: *mut GLsizei,
    infoLog: *mut GLchar
);
pub type PFNGLGETPROGRAMPIPELINEIVEXTPROC =
    unsafe extern "system" fn(pipeline: GLuint, pname: GLenum, params: *mut GLint);
pub type PFNGLISPROGRAMPIPELINEEXTPROC = unsafe extern "system" fn(pipeline: GLuint) -> GLboolean;
pub type PFNGLPROGRAMPARAMETERIEXTPROC =
    unsafe extern "system" fn(program: GLuint, pname: GLenum, value: GLint);
pub type PFNGLUSEPROGRAMSTAGESEXTPROC =
    unsafe extern "system" fn(pipeline: GLuint, stages: GLbitfield, program: GLuint);
pub type PFNGLVALIDATEPROGRAMPIPELINEEXTPROC = unsafe extern "system" fn(pipeline: GLuint);

pub type PFNGLPROGRAMUNIFORM1FEXTPROC =
    unsafe extern "system" fn(program: GLuint, location: GLint, v0: GLfloat);
pub type PFNGLPROGRAMUNIFORM2FEXTPROC =
    unsafe extern "system" fn(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat);
pub type PFNGLPROGRAMUNIFORM3FEXTPROC =
    unsafe extern "system" fn(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
pub type PFNGLPROGRAMUNIFORM4FEXTPROC = unsafe extern "system" fn(
    program: GLuint,
    location: GLint,
    v0: GLfloat,
    v1: GLfloat,
    v2: GLfloat,
    v3: GLfloat
);
pub type PFNGLPROGRAMUNIFORM1IEXTPROC =
    unsafe extern "system" fn(program: GLuint, location: GLint, v0: GLint);
pub type PFNGLPROGRAMUNIFORM2IEXTPROC =
    unsafe extern "system" fn(program: GLuint, location: GLint, v0: GLint, v1: GLint);
pub type PFNGLPROGRAMUNIFORM3IEXTPROC =
    unsafe extern "system" fn(program: GLuint, location: GLint, v0: GLint, v1: GLint, v2: GLint);
pub type PFNGLPROGRAMUNIFORM4IEXTPROC = unsafe extern "system" fn(
    program: GLuint,
    location: GLint,
    v0: GLint,
    v1: GLint,
    v2: GLint,
    v3: GLint
);
pub type PFNGLPROGRAMUNIFORM1UIEXTPROC =
    unsafe extern "system" fn(program: GLuint, location: GLint, v0: GLuint);
pub type PFNGLPROGRAMUNIFORM2UIEXTPROC =
    unsafe extern "system" fn(program: GLuint, location: GLint, v0: GLuint, v1: GLuint);
pub type PFNGLPROGRAMUNIFORM3UIEXTPROC =
    unsafe extern "system" fn(program: GLuint, location: GLint, v0: GLuint, v1: GLuint, v2: GLuint);
pub type PFNGLPROGRAMUNIFORM4UIEXTPROC = unsafe extern "system" fn(
    program: GLuint,
    location: GLint,
    v0: GLuint,
    v1: GLuint,
    v2: GLuint,
    v3: GLuint
);

pub type PFNGLPROGRAMUNIFORM1FVEXTPROC =
    unsafe extern "system" fn(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
pub type PFNGLPROGRAMUNIFORM2FVEXTPROC = PFNGLPROGRAMUNIFORM1FVEXTPROC;
pub type PFNGLPROGRAMUNIFORM3FVEXTPROC = PFNGLPROGRAMUNIFORM1FVEXTPROC;
pub type PFNGLPROGRAMUNIFORM4FVEXTPROC = PFNGLPROGRAMUNIFORM1FVEXTPROC;
pub type PFNGLPROGRAMUNIFORM1IVEXTPROC =
    unsafe extern "system" fn(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
pub type PFNGLPROGRAMUNIFORM2IVEXTPROC = PFNGLPROGRAMUNIFORM1IVEXTPROC;
pub type PFNGLPROGRAMUNIFORM3IVEXTPROC = PFNGLPROGRAMUNIFORM1IVEXTPROC;
pub type PFNGLPROGRAMUNIFORM4IVEXTPROC = PFNGLPROGRAMUNIFORM1IVEXTPROC;
pub type PFNGLPROGRAMUNIFORM1UIVEXTPROC =
    unsafe extern "system" fn(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
pub type PFNGLPROGRAMUNIFORM2UIVEXTPROC = PFNGLPROGRAMUNIFORM1UIVEXTPROC;
pub type PFNGLPROGRAMUNIFORM3UIVEXTPROC = PFNGLPROGRAMUNIFORM1UIVEXTPROC;
pub type PFNGLPROGRAMUNIFORM4UIVEXTPROC = PFNGLPROGRAMUNIFORM1UIVEXTPROC;

pub type PFNGLPROGRAMUNIFORMMATRIXFVEXTPROC = unsafe extern "system" fn(
    program: GLuint,
    location: GLint,
    count: GLsizei,
    transpose: GLboolean,
    value: *const GLfloat
);
pub type PFNGLPROGRAMUNIFORMMATRIX2FVEXTPROC = PFNGLPROGRAMUNIFORMMATRIXFVEXTPROC;
pub type PFNGLPROGRAMUNIFORMMATRIX3FVEXTPROC = PFNGLPROGRAMUNIFORMMATRIXFVEXTPROC;
pub type PFNGLPROGRAMUNIFORMMATRIX4FVEXTPROC = PFNGLPROGRAMUNIFORMMATRIXFVEXTPROC;
pub type PFNGLPROGRAMUNIFORMMATRIX2X3FVEXTPROC = PFNGLPROGRAMUNIFORMMATRIXFVEXTPROC;
pub type PFNGLPROGRAMUNIFORMMATRIX3X2FVEXTPROC = PFNGLPROGRAMUNIFORMMATRIXFVEXTPROC;
pub type PFNGLPROGRAMUNIFORMMATRIX2X4FVEXTPROC = PFNGLPROGRAMUNIFORMMATRIXFVEXTPROC;
pub type PFNGLPROGRAMUNIFORMMATRIX4X2FVEXTPROC = PFNGLPROGRAMUNIFORMMATRIXFVEXTPROC;
pub type PFNGLPROGRAMUNIFORMMATRIX3X4FVEXTPROC = PFNGLPROGRAMUNIFORMMATRIXFVEXTPROC;
pub type PFNGLPROGRAMUNIFORMMATRIX4X3FVEXTPROC = PFNGLPROGRAMUNIFORMMATRIXFVEXTPROC;
