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

//! GL_KHR_blend_equation_advanced
//!
//! Photoshop-style blend equations evaluated per fragment. BlendBarrierKHR
//! orders reads of the framebuffer between overlapping geometry.

use crate::GLenum;

pub const KHR_BLEND_EQUATION_ADVANCED: &str = "GL_KHR_blend_equation_advanced";

// Accepted by the {mode} parameter of BlendEquation and BlendEquationi.
pub const GL_MULTIPLY_KHR: GLenum = 0x9294;
pub const GL_SCREEN_KHR: GLenum = 0x9295;
pub const GL_OVERLAY_KHR: GLenum = 0x9296;
pub const GL_DARKEN_KHR: GLenum = 0x9297;
pub const GL_LIGHTEN_KHR: GLenum = 0x9298;
pub const GL_COLORDODGE_KHR: GLenum = 0x9299;
pub const GL_COLORBURN_KHR: GLenum = 0x929A;
pub const GL_HARDLIGHT_KHR: GLenum = 0x929B;
pub const GL_SOFTLIGHT_KHR: GLenum = 0x929C;
pub const GL_DIFFERENCE_KHR: GLenum = 0x929E;
pub const GL_EXCLUSION_KHR: GLenum = 0x92A0;
pub const GL_HSL_HUE_KHR: GLenum = 0x92AD;
pub const GL_HSL_SATURATION_KHR: GLenum = 0x92AE;
pub const GL_HSL_COLOR_KHR: GLenum = 0x92AF;
pub const GL_HSL_LUMINOSITY_KHR: GLenum = 0x92B0;

pub type PFNGLBLENDBARRIERKHRPROC = unsafe extern "system" fn();
