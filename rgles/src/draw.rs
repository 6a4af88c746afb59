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

//! Draw-path extension wrappers: tessellation and geometry parameters,
//! vertex array objects, instanced draws, per-buffer state and the advanced
//! blend barrier. Enum-typed parameters (draw modes, blend factors) stay as
//! raw GL values; their sets belong to the core API, not to these
//! extensions.

use std::os::raw::c_void;

use gles_sys::exts::*;
use gles_sys::{GLenum, GLsizei, GL_TRUE};

use crate::context::Gles;
use crate::error::Error;

impl Gles
{
    // --- GL_EXT_tessellation_shader ---

    /// Sets the number of control points per patch primitive.
    pub fn patch_vertices(&self, count: i32) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glPatchParameteriEXT,
            self.caps.ext_tessellation_shader,
            EXT_TESSELLATION_SHADER
        )?;
        unsafe { func(GL_PATCH_VERTICES_EXT, count) };
        Ok(())
    }

    // --- GL_EXT_geometry_shader ---

    /// Attaches every layer of {texture} to the framebuffer for layered
    /// rendering.
    pub fn framebuffer_texture(
        &self,
        target: GLenum,
        attachment: GLenum,
        texture: u32,
        level: i32
    ) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glFramebufferTextureEXT,
            self.caps.ext_geometry_shader,
            EXT_GEOMETRY_SHADER
        )?;
        unsafe { func(target, attachment, texture, level) };
        Ok(())
    }

    // --- GL_EXT_primitive_bounding_box ---

    pub fn primitive_bounding_box(&self, min: [f32; 4], max: [f32; 4]) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glPrimitiveBoundingBoxEXT,
            self.caps.ext_primitive_bounding_box,
            EXT_PRIMITIVE_BOUNDING_BOX
        )?;
        unsafe { func(min[0], min[1], min[2], min[3], max[0], max[1], max[2], max[3]) };
        Ok(())
    }

    // --- GL_KHR_blend_equation_advanced ---

    /// Orders framebuffer reads between overlapping primitives drawn with
    /// an advanced blend equation.
    pub fn blend_barrier(&self) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glBlendBarrierKHR,
            self.caps.khr_blend_equation_advanced,
            KHR_BLEND_EQUATION_ADVANCED
        )?;
        unsafe { func() };
        Ok(())
    }

    // --- GL_OES_vertex_array_object ---

    pub fn gen_vertex_arrays(&self, count: usize) -> Result<Vec<u32>, Error>
    {
        let func = self.require(
            self.funcs.glGenVertexArraysOES,
            self.caps.oes_vertex_array_object,
            OES_VERTEX_ARRAY_OBJECT
        )?;
        let mut arrays = vec![0u32; count];
        unsafe { func(count as GLsizei, arrays.as_mut_ptr()) };
        Ok(arrays)
    }

    pub fn bind_vertex_array(&self, array: u32) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glBindVertexArrayOES,
            self.caps.oes_vertex_array_object,
            OES_VERTEX_ARRAY_OBJECT
        )?;
        unsafe { func(array) };
        Ok(())
    }

    pub fn delete_vertex_arrays(&self, arrays: &[u32]) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glDeleteVertexArraysOES,
            self.caps.oes_vertex_array_object,
            OES_VERTEX_ARRAY_OBJECT
        )?;
        unsafe { func(arrays.len() as GLsizei, arrays.as_ptr()) };
        Ok(())
    }

    pub fn is_vertex_array(&self, array: u32) -> Result<bool, Error>
    {
        let func = self.require(
            self.funcs.glIsVertexArrayOES,
            self.caps.oes_vertex_array_object,
            OES_VERTEX_ARRAY_OBJECT
        )?;
        Ok(unsafe { func(array) } == GL_TRUE)
    }

    // --- GL_EXT_instanced_arrays ---

    pub fn draw_arrays_instanced(
        &self,
        mode: GLenum,
        first: i32,
        count: i32,
        instance_count: i32
    ) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glDrawArraysInstancedEXT,
            self.caps.ext_instanced_arrays,
            EXT_INSTANCED_ARRAYS
        )?;
        unsafe { func(mode, first, count, instance_count) };
        Ok(())
    }

    /// {offset} is a byte offset into the bound element array buffer.
    pub fn draw_elements_instanced(
        &self,
        mode: GLenum,
        count: i32,
        ty: GLenum,
        offset: usize,
        instance_count: i32
    ) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glDrawElementsInstancedEXT,
            self.caps.ext_instanced_arrays,
            EXT_INSTANCED_ARRAYS
        )?;
        unsafe { func(mode, count, ty, offset as *const c_void, instance_count) };
        Ok(())
    }

    pub fn vertex_attrib_divisor(&self, index: u32, divisor: u32) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glVertexAttribDivisorEXT,
            self.caps.ext_instanced_arrays,
            EXT_INSTANCED_ARRAYS
        )?;
        unsafe { func(index, divisor) };
        Ok(())
    }

    // --- GL_EXT_draw_buffers_indexed ---

    pub fn enable_indexed(&self, target: GLenum, index: u32) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glEnableiEXT,
            self.caps.ext_draw_buffers_indexed,
            EXT_DRAW_BUFFERS_INDEXED
        )?;
        unsafe { func(target, index) };
        Ok(())
    }

    pub fn disable_indexed(&self, target: GLenum, index: u32) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glDisableiEXT,
            self.caps.ext_draw_buffers_indexed,
            EXT_DRAW_BUFFERS_INDEXED
        )?;
        unsafe { func(target, index) };
        Ok(())
    }

    pub fn is_enabled_indexed(&self, target: GLenum, index: u32) -> Result<bool, Error>
    {
        let func = self.require(
            self.funcs.glIsEnablediEXT,
            self.caps.ext_draw_buffers_indexed,
            EXT_DRAW_BUFFERS_INDEXED
        )?;
        Ok(unsafe { func(target, index) } == GL_TRUE)
    }

    pub fn blend_equation_indexed(&self, buf: u32, mode: GLenum) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glBlendEquationiEXT,
            self.caps.ext_draw_buffers_indexed,
            EXT_DRAW_BUFFERS_INDEXED
        )?;
        unsafe { func(buf, mode) };
        Ok(())
    }

    pub fn blend_equation_separate_indexed(
        &self,
        buf: u32,
        mode_rgb: GLenum,
        mode_alpha: GLenum
    ) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glBlendEquationSeparateiEXT,
            self.caps.ext_draw_buffers_indexed,
            EXT_DRAW_BUFFERS_INDEXED
        )?;
        unsafe { func(buf, mode_rgb, mode_alpha) };
        Ok(())
    }

    pub fn blend_func_indexed(&self, buf: u32, src: GLenum, dst: GLenum) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glBlendFunciEXT,
            self.caps.ext_draw_buffers_indexed,
            EXT_DRAW_BUFFERS_INDEXED
        )?;
        unsafe { func(buf, src, dst) };
        Ok(())
    }

    pub fn blend_func_separate_indexed(
        &self,
        buf: u32,
        src_rgb: GLenum,
        dst_rgb: GLenum,
        src_alpha: GLenum,
        dst_alpha: GLenum
    ) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glBlendFuncSeparateiEXT,
            self.caps.ext_draw_buffers_indexed,
            EXT_DRAW_BUFFERS_INDEXED
        )?;
        unsafe { func(buf, src_rgb, dst_rgb, src_alpha, dst_alpha) };
        Ok(())
    }

    pub fn color_mask_indexed(
        &self,
        index: u32,
        r: bool,
        g: bool,
        b: bool,
        a: bool
    ) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glColorMaskiEXT,
            self.caps.ext_draw_buffers_indexed,
            EXT_DRAW_BUFFERS_INDEXED
        )?;
        let flag = |v| if v { gles_sys::GL_TRUE } else { gles_sys::GL_FALSE };
        unsafe { func(index, flag(r), flag(g), flag(b), flag(a)) };
        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use crate::context::tests::stub_gles;
    use crate::error::Error;

    #[test]
    fn every_wrapper_gates_on_its_own_extension()
    {
        // Only the VAO extension is live; everything else must refuse.
        let gl = stub_gles("GL_OES_vertex_array_object", true);
        assert!(gl.bind_vertex_array(1).is_ok());
        assert!(matches!(gl.patch_vertices(3), Err(Error::ExtensionUnavailable(_))));
        assert!(matches!(gl.blend_barrier(), Err(Error::ExtensionUnavailable(_))));
        assert!(matches!(
            gl.vertex_attrib_divisor(0, 1),
            Err(Error::ExtensionUnavailable(_))
        ));
        assert!(matches!(
            gl.enable_indexed(0x0BE2, 0),
            Err(Error::ExtensionUnavailable(_))
        ));
    }
}
