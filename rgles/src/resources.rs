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

//! Storage-side extension wrappers: immutable buffer stores, implicit
//! multisample resolve attachments and program binaries.

use std::os::raw::c_void;

use gles_sys::exts::*;
use gles_sys::{GLenum, GLint, GLsizei, GLsizeiptr};

use crate::context::Gles;
use crate::error::Error;

impl Gles
{
    // --- GL_EXT_buffer_storage ---

    /// Creates an immutable data store for the buffer bound to {target}.
    /// {flags} combines the MAP_*/STORAGE_* bits of the extension.
    pub fn buffer_storage(&self, target: GLenum, data: &[u8], flags: u32) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glBufferStorageEXT,
            self.caps.ext_buffer_storage,
            EXT_BUFFER_STORAGE
        )?;
        unsafe {
            func(
                target,
                data.len() as GLsizeiptr,
                data.as_ptr() as *const c_void,
                flags
            )
        };
        Ok(())
    }

    /// Same as [Gles::buffer_storage] with an uninitialized store of
    /// {size} bytes.
    pub fn buffer_storage_empty(&self, target: GLenum, size: usize, flags: u32) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glBufferStorageEXT,
            self.caps.ext_buffer_storage,
            EXT_BUFFER_STORAGE
        )?;
        unsafe { func(target, size as GLsizeiptr, std::ptr::null(), flags) };
        Ok(())
    }

    // --- GL_EXT_multisampled_render_to_texture ---

    pub fn renderbuffer_storage_multisample(
        &self,
        target: GLenum,
        samples: i32,
        internalformat: GLenum,
        width: i32,
        height: i32
    ) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glRenderbufferStorageMultisampleEXT,
            self.caps.ext_multisampled_render_to_texture,
            EXT_MULTISAMPLED_RENDER_TO_TEXTURE
        )?;
        unsafe { func(target, samples, internalformat, width, height) };
        Ok(())
    }

    pub fn framebuffer_texture_2d_multisample(
        &self,
        target: GLenum,
        attachment: GLenum,
        textarget: GLenum,
        texture: u32,
        level: i32,
        samples: i32
    ) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glFramebufferTexture2DMultisampleEXT,
            self.caps.ext_multisampled_render_to_texture,
            EXT_MULTISAMPLED_RENDER_TO_TEXTURE
        )?;
        unsafe { func(target, attachment, textarget, texture, level, samples) };
        Ok(())
    }

    /// Largest sample count the implementation resolves implicitly.
    pub fn max_samples(&self) -> Result<i32, Error>
    {
        if !self.caps.ext_multisampled_render_to_texture {
            return Err(Error::ExtensionUnavailable(EXT_MULTISAMPLED_RENDER_TO_TEXTURE));
        }
        Ok(self.get_integer(GL_MAX_SAMPLES_EXT))
    }

    // --- GL_OES_get_program_binary ---

    /// Reads back the driver-format binary of a linked program as
    /// (format, bytes).
    pub fn get_program_binary(&self, program: u32) -> Result<(GLenum, Vec<u8>), Error>
    {
        let func = self.require(
            self.funcs.glGetProgramBinaryOES,
            self.caps.oes_get_program_binary,
            OES_GET_PROGRAM_BINARY
        )?;
        let get_programiv = self.require(
            self.funcs.glGetProgramiv,
            self.caps.oes_get_program_binary,
            OES_GET_PROGRAM_BINARY
        )?;
        let mut size: GLint = 0;
        unsafe { get_programiv(program, GL_PROGRAM_BINARY_LENGTH_OES, &mut size) };
        let mut binary = vec![0u8; size.max(0) as usize];
        let mut written: GLsizei = 0;
        let mut format: GLenum = 0;
        unsafe {
            func(
                program,
                binary.len() as GLsizei,
                &mut written,
                &mut format,
                binary.as_mut_ptr() as *mut c_void
            )
        };
        binary.truncate(written.clamp(0, size) as usize);
        Ok((format, binary))
    }

    /// Reloads a binary produced by [Gles::get_program_binary] into
    /// {program}.
    pub fn program_binary(&self, program: u32, format: GLenum, binary: &[u8]) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glProgramBinaryOES,
            self.caps.oes_get_program_binary,
            OES_GET_PROGRAM_BINARY
        )?;
        unsafe {
            func(
                program,
                format,
                binary.as_ptr() as *const c_void,
                binary.len() as GLint
            )
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use crate::context::tests::stub_gles;
    use crate::error::Error;

    #[test]
    fn storage_wrappers_gate_on_their_extensions()
    {
        let gl = stub_gles("GL_EXT_buffer_storage", true);
        assert!(gl.buffer_storage_empty(0x8892, 64, 0).is_ok());
        assert!(matches!(
            gl.max_samples(),
            Err(Error::ExtensionUnavailable("GL_EXT_multisampled_render_to_texture"))
        ));
        assert!(matches!(
            gl.get_program_binary(1),
            Err(Error::ExtensionUnavailable("GL_OES_get_program_binary"))
        ));
    }
}
