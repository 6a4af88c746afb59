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

//! GL_KHR_debug
//!
//! Driver debug output: message log, application callback, debug groups and
//! object labels. On ES the entry points carry the KHR suffix.

use std::os::raw::c_void;

use crate::{GLboolean, GLchar, GLenum, GLsizei, GLuint, GLDEBUGPROCKHR};

pub const KHR_DEBUG: &str = "GL_KHR_debug";

// Tokens accepted by the {target} parameters of Enable, Disable and
// IsEnabled.
pub const GL_DEBUG_OUTPUT_KHR: GLenum = 0x92E0;
pub const GL_DEBUG_OUTPUT_SYNCHRONOUS_KHR: GLenum = 0x8242;

// Returned by GetIntegerv when {pname} is CONTEXT_FLAGS.
pub const GL_CONTEXT_FLAG_DEBUG_BIT_KHR: GLenum = 0x00000002;

// Tokens accepted by the {value} parameters of GetBooleanv, GetIntegerv,
// GetFloatv and GetInteger64v.
pub const GL_MAX_DEBUG_GROUP_STACK_DEPTH_KHR: GLenum = 0x826C;
pub const GL_DEBUG_GROUP_STACK_DEPTH_KHR: GLenum = 0x826D;
pub const GL_MAX_LABEL_LENGTH_KHR: GLenum = 0x82E8;
pub const GL_MAX_DEBUG_MESSAGE_LENGTH_KHR: GLenum = 0x9143;
pub const GL_MAX_DEBUG_LOGGED_MESSAGES_KHR: GLenum = 0x9144;
pub const GL_DEBUG_LOGGED_MESSAGES_KHR: GLenum = 0x9145;
pub const GL_DEBUG_NEXT_LOGGED_MESSAGE_LENGTH_KHR: GLenum = 0x8243;

// Tokens accepted by the {pname} parameter of GetPointervKHR.
pub const GL_DEBUG_CALLBACK_FUNCTION_KHR: GLenum = 0x8244;
pub const GL_DEBUG_CALLBACK_USER_PARAM_KHR: GLenum = 0x8245;

// Tokens accepted by the {source} parameters of DebugMessageControlKHR,
// DebugMessageInsertKHR and PushDebugGroupKHR.
pub const GL_DEBUG_SOURCE_API_KHR: GLenum = 0x8246;
pub const GL_DEBUG_SOURCE_WINDOW_SYSTEM_KHR: GLenum = 0x8247;
pub const GL_DEBUG_SOURCE_SHADER_COMPILER_KHR: GLenum = 0x8248;
pub const GL_DEBUG_SOURCE_THIRD_PARTY_KHR: GLenum = 0x8249;
pub const GL_DEBUG_SOURCE_APPLICATION_KHR: GLenum = 0x824A;
pub const GL_DEBUG_SOURCE_OTHER_KHR: GLenum = 0x824B;

// Tokens accepted by the {type} parameters of DebugMessageControlKHR and
// DebugMessageInsertKHR.
pub const GL_DEBUG_TYPE_ERROR_KHR: GLenum = 0x824C;
pub const GL_DEBUG_TYPE_DEPRECATED_BEHAVIOR_KHR: GLenum = 0x824D;
pub const GL_DEBUG_TYPE_UNDEFINED_BEHAVIOR_KHR: GLenum = 0x824E;
pub const GL_DEBUG_TYPE_PORTABILITY_KHR: GLenum = 0x824F;
pub const GL_DEBUG_TYPE_PERFORMANCE_KHR: GLenum = 0x8250;
pub const GL_DEBUG_TYPE_OTHER_KHR: GLenum = 0x8251;
pub const GL_DEBUG_TYPE_MARKER_KHR: GLenum = 0x8268;
pub const GL_DEBUG_TYPE_PUSH_GROUP_KHR: GLenum = 0x8269;
pub const GL_DEBUG_TYPE_POP_GROUP_KHR: GLenum = 0x826A;

// Tokens accepted by the {severity} parameters of DebugMessageControlKHR and
// DebugMessageInsertKHR.
pub const GL_DEBUG_SEVERITY_HIGH_KHR: GLenum = 0x9146;
pub const GL_DEBUG_SEVERITY_MEDIUM_KHR: GLenum = 0x9147;
pub const GL_DEBUG_SEVERITY_LOW_KHR: GLenum = 0x9148;
pub const GL_DEBUG_SEVERITY_NOTIFICATION_KHR: GLenum = 0x826B;

// Tokens accepted by the {identifier} parameters of ObjectLabelKHR and
// GetObjectLabelKHR.
pub const GL_BUFFER_KHR: GLenum = 0x82E0;
pub const GL_SHADER_KHR: GLenum = 0x82E1;
pub const GL_PROGRAM_KHR: GLenum = 0x82E2;
pub const GL_VERTEX_ARRAY_KHR: GLenum = 0x8074;
pub const GL_QUERY_KHR: GLenum = 0x82E3;
pub const GL_PROGRAM_PIPELINE_KHR: GLenum = 0x82E4;
pub const GL_SAMPLER_KHR: GLenum = 0x82E6;

// Error codes this extension adds to GetError.
pub const GL_STACK_OVERFLOW_KHR: GLenum = 0x0503;
pub const GL_STACK_UNDERFLOW_KHR: GLenum = 0x0504;

pub type PFNGLDEBUGMESSAGECONTROLKHRPROC = unsafe extern "system" fn(
    source: GLenum,
    gltype: GLenum,
    severity: GLenum,
    count: GLsizei,
    ids: *const GLuint,
    enabled: GLboolean
);
pub type PFNGLDEBUGMESSAGEINSERTKHRPROC = unsafe extern "system" fn(
    source: GLenum,
    gltype: GLenum,
    id: GLuint,
    severity: GLenum,
    length: GLsizei,
    buf: *const GLchar
);
pub type PFNGLDEBUGMESSAGECALLBACKKHRPROC =
    unsafe extern "system" fn(callback: GLDEBUGPROCKHR, userParam: *const c_void);
pub type PFNGLGETDEBUGMESSAGELOGKHRPROC = unsafe extern "system" fn(
    count: GLuint,
    bufSize: GLsizei,
    sources: *mut GLenum,
    types: *mut GLenum,
    ids: *mut GLuint,
    severities: *mut GLenum,
    lengths: *mut GLsizei,
    messageLog: *mut GLchar
) -> GLuint;
pub type PFNGLPUSHDEBUGGROUPKHRPROC =
    unsafe extern "system" fn(source: GLenum, id: GLuint, length: GLsizei, message: *const GLchar);
pub type PFNGLPOPDEBUGGROUPKHRPROC = unsafe extern "system" fn();
pub type PFNGLOBJECTLABELKHRPROC =
    unsafe extern "system" fn(identifier: GLenum, name: GLuint, length: GLsizei, label: *const GLchar);
pub type PFNGLGETOBJECTLABELKHRPROC = unsafe extern "system" fn(
    identifier: GLenum,
    name: GLuint,
    bufSize: GLsizei,
    length: *mut GLsizei,
    label: *mut GLchar
);
pub type PFNGLOBJECTPTRLABELKHRPROC =
    unsafe extern "system" fn(ptr: *const c_void, length: GLsizei, label: *const GLchar);
pub type PFNGLGETOBJECTPTRLABELKHRPROC = unsafe extern "system" fn(
    ptr: *const c_void,
    bufSize: GLsizei,
    length: *mut GLsizei,
    label: *mut GLchar
);
pub type PFNGLGETPOINTERVKHRPROC = unsafe extern "system" fn(pname: GLenum, params: *mut *mut c_void);
