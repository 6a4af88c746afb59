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

use gles_sys::{
    GLenum,
    GL_INVALID_ENUM,
    GL_INVALID_FRAMEBUFFER_OPERATION,
    GL_INVALID_OPERATION,
    GL_INVALID_VALUE,
    GL_NO_ERROR,
    GL_OUT_OF_MEMORY
};
use gles_sys::exts::{GL_STACK_OVERFLOW_KHR, GL_STACK_UNDERFLOW_KHR};
use thiserror::Error;

/// Failures of the binding layer itself. GL call errors stay with the
/// driver and are only surfaced through [GlError].
#[derive(Debug, Error)]
pub enum Error
{
    #[error("could not load native library (tried {0})")]
    LibraryNotFound(String),

    #[error("missing entry point {0}")]
    MissingEntryPoint(&'static str),

    #[error("malformed GL_VERSION string: {0}")]
    BadVersionString(String),

    #[error("{0} is not available on this context")]
    ExtensionUnavailable(&'static str),

    #[error("string passed to the driver contains an interior nul byte")]
    InteriorNul
}

/// Codes the driver reports through its own error-query mechanism.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum GlError
{
    #[error("GL_INVALID_ENUM")]
    InvalidEnum,
    #[error("GL_INVALID_VALUE")]
    InvalidValue,
    #[error("GL_INVALID_OPERATION")]
    InvalidOperation,
    #[error("GL_OUT_OF_MEMORY")]
    OutOfMemory,
    #[error("GL_INVALID_FRAMEBUFFER_OPERATION")]
    InvalidFramebufferOperation,
    #[error("GL_STACK_OVERFLOW")]
    StackOverflow,
    #[error("GL_STACK_UNDERFLOW")]
    StackUnderflow,
    #[error("unknown GL error 0x{0:04X}")]
    Unknown(GLenum)
}

impl GlError
{
    /// None when the driver reports GL_NO_ERROR.
    pub fn from_raw(raw: GLenum) -> Option<GlError>
    {
        match raw {
            GL_NO_ERROR => None,
            GL_INVALID_ENUM => Some(GlError::InvalidEnum),
            GL_INVALID_VALUE => Some(GlError::InvalidValue),
            GL_INVALID_OPERATION => Some(GlError::InvalidOperation),
            GL_OUT_OF_MEMORY => Some(GlError::OutOfMemory),
            GL_INVALID_FRAMEBUFFER_OPERATION => Some(GlError::InvalidFramebufferOperation),
            GL_STACK_OVERFLOW_KHR => Some(GlError::StackOverflow),
            GL_STACK_UNDERFLOW_KHR => Some(GlError::StackUnderflow),
            _ => Some(GlError::Unknown(raw))
        }
    }

    pub fn into_raw(self) -> GLenum
    {
        match self {
            GlError::InvalidEnum => GL_INVALID_ENUM,
            GlError::InvalidValue => GL_INVALID_VALUE,
            GlError::InvalidOperation => GL_INVALID_OPERATION,
            GlError::OutOfMemory => GL_OUT_OF_MEMORY,
            GlError::InvalidFramebufferOperation => GL_INVALID_FRAMEBUFFER_OPERATION,
            GlError::StackOverflow => GL_STACK_OVERFLOW_KHR,
            GlError::StackUnderflow => GL_STACK_UNDERFLOW_KHR,
            GlError::Unknown(raw) => raw
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn no_error_is_none()
    {
        assert_eq!(GlError::from_raw(GL_NO_ERROR), None);
    }

    #[test]
    fn raw_round_trip()
    {
        for raw in [0x0500, 0x0501, 0x0502, 0x0503, 0x0504, 0x0505, 0x0506, 0xBEEF] {
            let err = GlError::from_raw(raw).unwrap();
            assert_eq!(err.into_raw(), raw);
        }
    }

    #[test]
    fn unknown_keeps_the_code()
    {
        assert_eq!(GlError::from_raw(0x1234), Some(GlError::Unknown(0x1234)));
    }
}
