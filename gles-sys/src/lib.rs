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

#![allow(non_upper_case_globals)]
#![allow(non_snake_case)]
#![allow(non_camel_case_types)]

pub mod exts;
pub mod functions;
pub mod library;

use std::os::raw::{c_char, c_float, c_int, c_short, c_uchar, c_uint, c_ushort, c_void};

/// typedef from khrplatform.h; widths are fixed by the registry.
pub type GLenum = c_uint;
pub type GLboolean = c_uchar;
pub type GLbitfield = c_uint;
pub type GLbyte = c_char;
pub type GLubyte = c_uchar;
pub type GLshort = c_short;
pub type GLushort = c_ushort;
pub type GLint = c_int;
pub type GLuint = c_uint;
pub type GLfixed = GLint;
pub type GLint64 = i64;
pub type GLuint64 = u64;
pub type GLsizei = c_int;
pub type GLchar = c_char;
pub type GLfloat = c_float;
pub type GLclampf = c_float;
pub type GLintptr = isize;
pub type GLsizeiptr = isize;
pub type GLvoid = c_void;

/// struct __GLsync*
pub enum __GLsync {}
pub type GLsync = *const __GLsync;

/// void* handle produced by EGL_KHR_image
pub type GLeglImageOES = *const c_void;

/// typedef GLDEBUGPROCKHR (GL_KHR_debug)
pub type GLDEBUGPROCKHR = Option<
    unsafe extern "system" fn(
        source: GLenum,
        gltype: GLenum,
        id: GLuint,
        severity: GLenum,
        length: GLsizei,
        message: *const GLchar,
        userParam: *mut c_void
    )
>;

pub const GL_FALSE: GLboolean = 0;
pub const GL_TRUE: GLboolean = 1;

// Error codes returned by GetError (GL_STACK_OVERFLOW/UNDERFLOW are added
// by GL_KHR_debug and live in exts::khr_debug).
pub const GL_NO_ERROR: GLenum = 0;
pub const GL_INVALID_ENUM: GLenum = 0x0500;
pub const GL_INVALID_VALUE: GLenum = 0x0501;
pub const GL_INVALID_OPERATION: GLenum = 0x0502;
pub const GL_OUT_OF_MEMORY: GLenum = 0x0505;
pub const GL_INVALID_FRAMEBUFFER_OPERATION: GLenum = 0x0506;

// Accepted by the {name} parameter of GetString.
pub const GL_VENDOR: GLenum = 0x1F00;
pub const GL_RENDERER: GLenum = 0x1F01;
pub const GL_VERSION: GLenum = 0x1F02;
pub const GL_EXTENSIONS: GLenum = 0x1F03;

// Accepted by the {pname} parameter of GetIntegerv (ES 3.0+).
pub const GL_MAJOR_VERSION: GLenum = 0x821B;
pub const GL_MINOR_VERSION: GLenum = 0x821C;
pub const GL_NUM_EXTENSIONS: GLenum = 0x821D;

// Accepted wherever a filter enum is: DebugMessageControlKHR among others.
pub const GL_DONT_CARE: GLenum = 0x1100;

// Accepted by the {pname} parameter of GetProgramiv and
// GetProgramPipelineivEXT.
pub const GL_INFO_LOG_LENGTH: GLenum = 0x8B84;

// Entry points every context exposes; the capability builder cannot run
// without these four.
pub type PFNGLGETERRORPROC = unsafe extern "system" fn() -> GLenum;
pub type PFNGLGETSTRINGPROC = unsafe extern "system" fn(name: GLenum) -> *const GLubyte;
pub type PFNGLGETSTRINGIPROC = unsafe extern "system" fn(name: GLenum, index: GLuint) -> *const GLubyte;
pub type PFNGLGETINTEGERVPROC = unsafe extern "system" fn(pname: GLenum, data: *mut GLint);
pub type PFNGLGETPROGRAMIVPROC = unsafe extern "system" fn(program: GLuint, pname: GLenum, params: *mut GLint);

/// typedef __eglMustCastToProperFunctionPointerType (*PFNEGLGETPROCADDRESSPROC)(const char*)
pub type PFNEGLGETPROCADDRESSPROC = unsafe extern "system" fn(procname: *const c_char) -> *const c_void;

#[cfg(test)]
mod tests
{
    use std::mem::size_of;

    use super::*;

    #[test]
    fn registry_type_widths()
    {
        assert_eq!(size_of::<GLenum>(), 4);
        assert_eq!(size_of::<GLboolean>(), 1);
        assert_eq!(size_of::<GLbitfield>(), 4);
        assert_eq!(size_of::<GLbyte>(), 1);
        assert_eq!(size_of::<GLshort>(), 2);
        assert_eq!(size_of::<GLint>(), 4);
        assert_eq!(size_of::<GLint64>(), 8);
        assert_eq!(size_of::<GLfixed>(), 4);
        assert_eq!(size_of::<GLfloat>(), 4);
        assert_eq!(size_of::<GLintptr>(), size_of::<*const ()>());
        assert_eq!(size_of::<GLsizeiptr>(), size_of::<*const ()>());
        assert_eq!(size_of::<GLsync>(), size_of::<*const ()>());
    }

    #[test]
    fn debug_callback_is_nullable()
    {
        // Option<extern fn> must stay pointer-sized for the ABI.
        assert_eq!(size_of::<GLDEBUGPROCKHR>(), size_of::<*const ()>());
        let none: GLDEBUGPROCKHR = None;
        assert!(none.is_none());
    }
}
