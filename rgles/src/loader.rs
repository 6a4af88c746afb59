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

use std::ffi::CString;
use std::mem::transmute;
use std::os::raw::c_void;

use gles_sys::library::NativeLibrary;
use gles_sys::PFNEGLGETPROCADDRESSPROC;
use log::{debug, trace};

use crate::error::Error;

#[cfg(target_os = "windows")]
const EGL_NAMES: &[&str] = &["libEGL.dll"];
#[cfg(target_os = "macos")]
const EGL_NAMES: &[&str] = &["libEGL.dylib"];
#[cfg(all(unix, not(target_os = "macos")))]
const EGL_NAMES: &[&str] = &["libEGL.so.1", "libEGL.so"];

#[cfg(target_os = "windows")]
const GLES_NAMES: &[&str] = &["libGLESv2.dll"];
#[cfg(target_os = "macos")]
const GLES_NAMES: &[&str] = &["libGLESv2.dylib"];
#[cfg(all(unix, not(target_os = "macos")))]
const GLES_NAMES: &[&str] = &["libGLESv2.so.2", "libGLESv2.so"];

const EGL_ENV: &str = "RGLES_EGL_LIBRARY";
const GLES_ENV: &str = "RGLES_GLES_LIBRARY";

/// Resolves driver entry points: eglGetProcAddress first, then a plain
/// symbol lookup on the client library. Some drivers only surface extension
/// entry points one of the two ways.
pub struct ProcProvider
{
    gles: NativeLibrary,
    egl_get_proc_address: PFNEGLGETPROCADDRESSPROC,
    // Keeps the EGL handle open for the lifetime of the resolved pointer.
    _egl: NativeLibrary
}

impl ProcProvider
{
    pub fn open() -> Result<ProcProvider, Error>
    {
        let egl = open_first(EGL_ENV, EGL_NAMES)?;
        let gles = open_first(GLES_ENV, GLES_NAMES)?;
        debug!("loaded {} and {}", egl.name(), gles.name());
        let ptr = egl.sym("eglGetProcAddress");
        if ptr.is_null() {
            return Err(Error::MissingEntryPoint("eglGetProcAddress"));
        }
        let egl_get_proc_address = unsafe { transmute::<*const c_void, PFNEGLGETPROCADDRESSPROC>(ptr) };
        Ok(ProcProvider {
            gles,
            egl_get_proc_address,
            _egl: egl
        })
    }

    /// Null when the driver exports the symbol neither way.
    pub fn lookup(&self, name: &str) -> *const c_void
    {
        let cname = match CString::new(name) {
            Ok(v) => v,
            Err(_) => return std::ptr::null()
        };
        let ptr = unsafe { (self.egl_get_proc_address)(cname.as_ptr()) };
        if !ptr.is_null() {
            return ptr;
        }
        let ptr = self.gles.sym(name);
        if ptr.is_null() {
            trace!("{} did not resolve", name);
        }
        ptr
    }
}

fn open_first(env: &str, defaults: &[&str]) -> Result<NativeLibrary, Error>
{
    if let Ok(name) = std::env::var(env) {
        debug!("{} overrides the driver library name with {}", env, name);
        return NativeLibrary::open(&name).ok_or(Error::LibraryNotFound(name));
    }
    for name in defaults {
        if let Some(lib) = NativeLibrary::open(name) {
            return Ok(lib);
        }
    }
    Err(Error::LibraryNotFound(defaults.join(", ")))
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn open_first_reports_all_candidates()
    {
        match open_first("RGLES_TEST_UNSET_ENV", &["libnot_a_driver.so.9", "libnot_a_driver.so"]) {
            Err(Error::LibraryNotFound(tried)) => {
                assert!(tried.contains("libnot_a_driver.so.9"));
                assert!(tried.contains("libnot_a_driver.so"));
            }
            _ => panic!("expected LibraryNotFound")
        }
    }
}
