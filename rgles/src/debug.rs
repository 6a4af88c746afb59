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

//! GL_KHR_debug wrappers: message filtering, application messages, debug
//! groups, object labels and the driver-to-Rust callback trampoline.

use std::ffi::CStr;
use std::os::raw::c_void;
use std::slice;

use gles_sys::exts::*;
use gles_sys::{GLchar, GLenum, GLsizei, GLuint, GL_DONT_CARE};

use crate::context::Gles;
use crate::error::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DebugSource
{
    Api,
    WindowSystem,
    ShaderCompiler,
    ThirdParty,
    Application,
    Other
}

impl DebugSource
{
    pub fn into_raw(self) -> GLenum
    {
        match self {
            DebugSource::Api => GL_DEBUG_SOURCE_API_KHR,
            DebugSource::WindowSystem => GL_DEBUG_SOURCE_WINDOW_SYSTEM_KHR,
            DebugSource::ShaderCompiler => GL_DEBUG_SOURCE_SHADER_COMPILER_KHR,
            DebugSource::ThirdParty => GL_DEBUG_SOURCE_THIRD_PARTY_KHR,
            DebugSource::Application => GL_DEBUG_SOURCE_APPLICATION_KHR,
            DebugSource::Other => GL_DEBUG_SOURCE_OTHER_KHR
        }
    }

    pub fn from_raw(raw: GLenum) -> DebugSource
    {
        match raw {
            GL_DEBUG_SOURCE_API_KHR => DebugSource::Api,
            GL_DEBUG_SOURCE_WINDOW_SYSTEM_KHR => DebugSource::WindowSystem,
            GL_DEBUG_SOURCE_SHADER_COMPILER_KHR => DebugSource::ShaderCompiler,
            GL_DEBUG_SOURCE_THIRD_PARTY_KHR => DebugSource::ThirdParty,
            GL_DEBUG_SOURCE_APPLICATION_KHR => DebugSource::Application,
            _ => DebugSource::Other
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DebugType
{
    Error,
    DeprecatedBehavior,
    UndefinedBehavior,
    Portability,
    Performance,
    Marker,
    PushGroup,
    PopGroup,
    Other
}

impl DebugType
{
    pub fn into_raw(self) -> GLenum
    {
        match self {
            DebugType::Error => GL_DEBUG_TYPE_ERROR_KHR,
            DebugType::DeprecatedBehavior => GL_DEBUG_TYPE_DEPRECATED_BEHAVIOR_KHR,
            DebugType::UndefinedBehavior => GL_DEBUG_TYPE_UNDEFINED_BEHAVIOR_KHR,
            DebugType::Portability => GL_DEBUG_TYPE_PORTABILITY_KHR,
            DebugType::Performance => GL_DEBUG_TYPE_PERFORMANCE_KHR,
            DebugType::Marker => GL_DEBUG_TYPE_MARKER_KHR,
            DebugType::PushGroup => GL_DEBUG_TYPE_PUSH_GROUP_KHR,
            DebugType::PopGroup => GL_DEBUG_TYPE_POP_GROUP_KHR,
            DebugType::Other => GL_DEBUG_TYPE_OTHER_KHR
        }
    }

    pub fn from_raw(raw: GLenum) -> DebugType
    {
        match raw {
            GL_DEBUG_TYPE_ERROR_KHR => DebugType::Error,
            GL_DEBUG_TYPE_DEPRECATED_BEHAVIOR_KHR => DebugType::DeprecatedBehavior,
            GL_DEBUG_TYPE_UNDEFINED_BEHAVIOR_KHR => DebugType::UndefinedBehavior,
            GL_DEBUG_TYPE_PORTABILITY_KHR => DebugType::Portability,
            GL_DEBUG_TYPE_PERFORMANCE_KHR => DebugType::Performance,
            GL_DEBUG_TYPE_MARKER_KHR => DebugType::Marker,
            GL_DEBUG_TYPE_PUSH_GROUP_KHR => DebugType::PushGroup,
            GL_DEBUG_TYPE_POP_GROUP_KHR => DebugType::PopGroup,
            _ => DebugType::Other
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DebugSeverity
{
    High,
    Medium,
    Low,
    Notification
}

impl DebugSeverity
{
    pub fn into_raw(self) -> GLenum
    {
        match self {
            DebugSeverity::High => GL_DEBUG_SEVERITY_HIGH_KHR,
            DebugSeverity::Medium => GL_DEBUG_SEVERITY_MEDIUM_KHR,
            DebugSeverity::Low => GL_DEBUG_SEVERITY_LOW_KHR,
            DebugSeverity::Notification => GL_DEBUG_SEVERITY_NOTIFICATION_KHR
        }
    }

    pub fn from_raw(raw: GLenum) -> DebugSeverity
    {
        match raw {
            GL_DEBUG_SEVERITY_HIGH_KHR => DebugSeverity::High,
            GL_DEBUG_SEVERITY_MEDIUM_KHR => DebugSeverity::Medium,
            GL_DEBUG_SEVERITY_LOW_KHR => DebugSeverity::Low,
            _ => DebugSeverity::Notification
        }
    }
}

/// Namespaces accepted by the object label commands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DebugObject
{
    Buffer,
    Shader,
    Program,
    VertexArray,
    Query,
    ProgramPipeline,
    Sampler
}

impl DebugObject
{
    pub fn into_raw(self) -> GLenum
    {
        match self {
            DebugObject::Buffer => GL_BUFFER_KHR,
            DebugObject::Shader => GL_SHADER_KHR,
            DebugObject::Program => GL_PROGRAM_KHR,
            DebugObject::VertexArray => GL_VERTEX_ARRAY_KHR,
            DebugObject::Query => GL_QUERY_KHR,
            DebugObject::ProgramPipeline => GL_PROGRAM_PIPELINE_KHR,
            DebugObject::Sampler => GL_SAMPLER_KHR
        }
    }
}

/// One message as delivered by the driver.
#[derive(Debug)]
pub struct DebugMessage<'a>
{
    pub source: DebugSource,
    pub ty: DebugType,
    pub id: u32,
    pub severity: DebugSeverity,
    pub message: &'a str
}

pub(crate) type DebugHandler = dyn Fn(DebugMessage);
// Double boxed so the trampoline receives a thin pointer.
pub(crate) type BoxedDebugHandler = Box<Box<DebugHandler>>;

pub(crate) unsafe extern "system" fn debug_trampoline(
    source: GLenum,
    gltype: GLenum,
    id: GLuint,
    severity: GLenum,
    length: GLsizei,
    message: *const GLchar,
    user_param: *mut c_void
)
{
    if user_param.is_null() {
        return;
    }
    let handler = &*(user_param as *const Box<DebugHandler>);
    let bytes = if message.is_null() {
        &[][..]
    } else if length < 0 {
        // Negative length means null terminated per the extension.
        CStr::from_ptr(message).to_bytes()
    } else {
        slice::from_raw_parts(message as *const u8, length as usize)
    };
    let text = String::from_utf8_lossy(bytes);
    handler(DebugMessage {
        source: DebugSource::from_raw(source),
        ty: DebugType::from_raw(gltype),
        id,
        severity: DebugSeverity::from_raw(severity),
        message: &text
    });
}

impl Gles
{
    /// Installs {handler} as the driver debug callback. The previous
    /// handler, if any, is dropped after the driver stops referencing it.
    pub fn set_debug_callback<F: Fn(DebugMessage) + 'static>(&self, handler: F) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glDebugMessageCallbackKHR,
            self.caps.khr_debug,
            KHR_DEBUG
        )?;
        let boxed: BoxedDebugHandler = Box::new(Box::new(handler));
        let user_param = &*boxed as *const Box<DebugHandler> as *const c_void;
        unsafe { func(Some(debug_trampoline), user_param) };
        *self.debug_handler.borrow_mut() = Some(boxed);
        Ok(())
    }

    pub fn clear_debug_callback(&self) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glDebugMessageCallbackKHR,
            self.caps.khr_debug,
            KHR_DEBUG
        )?;
        unsafe { func(None, std::ptr::null()) };
        *self.debug_handler.borrow_mut() = None;
        Ok(())
    }

    /// Enables or disables delivery of a message class. None means
    /// DONT_CARE for that filter axis.
    pub fn debug_message_control(
        &self,
        source: Option<DebugSource>,
        ty: Option<DebugType>,
        severity: Option<DebugSeverity>,
        ids: &[u32],
        enabled: bool
    ) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glDebugMessageControlKHR,
            self.caps.khr_debug,
            KHR_DEBUG
        )?;
        unsafe {
            func(
                source.map(DebugSource::into_raw).unwrap_or(GL_DONT_CARE),
                ty.map(DebugType::into_raw).unwrap_or(GL_DONT_CARE),
                severity.map(DebugSeverity::into_raw).unwrap_or(GL_DONT_CARE),
                ids.len() as GLsizei,
                if ids.is_empty() { std::ptr::null() } else { ids.as_ptr() },
                if enabled { gles_sys::GL_TRUE } else { gles_sys::GL_FALSE }
            )
        };
        Ok(())
    }

    /// Injects an application message into the debug stream.
    pub fn debug_message_insert(
        &self,
        source: DebugSource,
        ty: DebugType,
        id: u32,
        severity: DebugSeverity,
        message: &str
    ) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glDebugMessageInsertKHR,
            self.caps.khr_debug,
            KHR_DEBUG
        )?;
        unsafe {
            func(
                source.into_raw(),
                ty.into_raw(),
                id,
                severity.into_raw(),
                message.len() as GLsizei,
                message.as_ptr() as *const GLchar
            )
        };
        Ok(())
    }

    pub fn push_debug_group(&self, source: DebugSource, id: u32, message: &str) -> Result<(), Error>
    {
        let func = self.require(self.funcs.glPushDebugGroupKHR, self.caps.khr_debug, KHR_DEBUG)?;
        unsafe {
            func(
                source.into_raw(),
                id,
                message.len() as GLsizei,
                message.as_ptr() as *const GLchar
            )
        };
        Ok(())
    }

    pub fn pop_debug_group(&self) -> Result<(), Error>
    {
        let func = self.require(self.funcs.glPopDebugGroupKHR, self.caps.khr_debug, KHR_DEBUG)?;
        unsafe { func() };
        Ok(())
    }

    pub fn object_label(&self, identifier: DebugObject, name: u32, label: &str) -> Result<(), Error>
    {
        let func = self.require(self.funcs.glObjectLabelKHR, self.caps.khr_debug, KHR_DEBUG)?;
        unsafe {
            func(
                identifier.into_raw(),
                name,
                label.len() as GLsizei,
                label.as_ptr() as *const GLchar
            )
        };
        Ok(())
    }

    pub fn get_object_label(&self, identifier: DebugObject, name: u32) -> Result<String, Error>
    {
        let func = self.require(self.funcs.glGetObjectLabelKHR, self.caps.khr_debug, KHR_DEBUG)?;
        let cap = self.get_integer(GL_MAX_LABEL_LENGTH_KHR).max(1);
        let mut buf = vec![0u8; cap as usize];
        let mut len: GLsizei = 0;
        unsafe {
            func(
                identifier.into_raw(),
                name,
                cap,
                &mut len,
                buf.as_mut_ptr() as *mut GLchar
            )
        };
        buf.truncate(len.clamp(0, cap) as usize);
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn enum_raw_round_trip()
    {
        for source in [
            DebugSource::Api,
            DebugSource::WindowSystem,
            DebugSource::ShaderCompiler,
            DebugSource::ThirdParty,
            DebugSource::Application,
            DebugSource::Other
        ] {
            assert_eq!(DebugSource::from_raw(source.into_raw()), source);
        }
        for ty in [
            DebugType::Error,
            DebugType::DeprecatedBehavior,
            DebugType::UndefinedBehavior,
            DebugType::Portability,
            DebugType::Performance,
            DebugType::Marker,
            DebugType::PushGroup,
            DebugType::PopGroup,
            DebugType::Other
        ] {
            assert_eq!(DebugType::from_raw(ty.into_raw()), ty);
        }
        for severity in [
            DebugSeverity::High,
            DebugSeverity::Medium,
            DebugSeverity::Low,
            DebugSeverity::Notification
        ] {
            assert_eq!(DebugSeverity::from_raw(severity.into_raw()), severity);
        }
    }

    #[test]
    fn unknown_enums_degrade()
    {
        assert_eq!(DebugSource::from_raw(0xFFFF), DebugSource::Other);
        assert_eq!(DebugType::from_raw(0xFFFF), DebugType::Other);
        assert_eq!(DebugSeverity::from_raw(0xFFFF), DebugSeverity::Notification);
    }

    // Drives the extern "system" trampoline directly, the way the driver
    // would, and checks the message reaches the Rust closure intact.
    #[test]
    fn trampoline_delivers_messages()
    {
        use std::cell::Cell;
        use std::rc::Rc;

        let seen = Rc::new(Cell::new(0u32));
        let seen2 = seen.clone();
        let handler: BoxedDebugHandler = Box::new(Box::new(move |msg: DebugMessage| {
            assert_eq!(msg.source, DebugSource::ShaderCompiler);
            assert_eq!(msg.ty, DebugType::Performance);
            assert_eq!(msg.severity, DebugSeverity::Low);
            assert_eq!(msg.id, 42);
            assert_eq!(msg.message, "shader recompiled");
            seen2.set(seen2.get() + 1);
        }));
        let user_param = &*handler as *const Box<DebugHandler> as *mut std::os::raw::c_void;
        let text = "shader recompiled";
        unsafe {
            debug_trampoline(
                GL_DEBUG_SOURCE_SHADER_COMPILER_KHR,
                GL_DEBUG_TYPE_PERFORMANCE_KHR,
                42,
                GL_DEBUG_SEVERITY_LOW_KHR,
                text.len() as GLsizei,
                text.as_ptr() as *const GLchar,
                user_param
            );
        }
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn trampoline_handles_nul_terminated_messages()
    {
        let handler: BoxedDebugHandler = Box::new(Box::new(|msg: DebugMessage| {
            assert_eq!(msg.message, "from the driver");
        }));
        let user_param = &*handler as *const Box<DebugHandler> as *mut std::os::raw::c_void;
        unsafe {
            debug_trampoline(
                GL_DEBUG_SOURCE_API_KHR,
                GL_DEBUG_TYPE_OTHER_KHR,
                0,
                GL_DEBUG_SEVERITY_NOTIFICATION_KHR,
                -1,
                b"from the driver\0".as_ptr() as *const GLchar,
                user_param
            );
        }
    }

    #[test]
    fn trampoline_ignores_null_state()
    {
        unsafe {
            debug_trampoline(0, 0, 0, 0, 0, std::ptr::null(), std::ptr::null_mut());
        }
    }
}
