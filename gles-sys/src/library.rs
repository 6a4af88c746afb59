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

//! Platform shared-library primitives the driver loader builds on.

use std::ffi::CString;
use std::os::raw::c_void;

#[cfg(unix)]
use libc::{dlclose, dlopen, dlsym, RTLD_LAZY};

#[cfg(windows)]
#[link(name = "kernel32")]
extern "system" {
    fn LoadLibraryA(name: *const std::os::raw::c_char) -> *mut c_void;
    fn GetProcAddress(module: *mut c_void, name: *const std::os::raw::c_char) -> *mut c_void;
    fn FreeLibrary(module: *mut c_void) -> i32;
}

/// Handle on a loaded driver library.
pub struct NativeLibrary
{
    handle: *mut c_void,
    name: String
}

// The handle refers to process-global loader state.
unsafe impl Send for NativeLibrary {}
unsafe impl Sync for NativeLibrary {}

impl NativeLibrary
{
    pub fn open(name: &str) -> Option<NativeLibrary>
    {
        let cname = CString::new(name).ok()?;
        let handle = unsafe { Self::open_impl(cname.as_ptr()) };
        if handle.is_null() {
            return None;
        }
        Some(NativeLibrary {
            handle,
            name: name.into()
        })
    }

    #[cfg(unix)]
    unsafe fn open_impl(name: *const std::os::raw::c_char) -> *mut c_void
    {
        dlopen(name, RTLD_LAZY)
    }

    #[cfg(windows)]
    unsafe fn open_impl(name: *const std::os::raw::c_char) -> *mut c_void
    {
        LoadLibraryA(name)
    }

    pub fn name(&self) -> &str
    {
        &self.name
    }

    /// Null when the library does not export {symbol}.
    pub fn sym(&self, symbol: &str) -> *const c_void
    {
        let csym = match CString::new(symbol) {
            Ok(v) => v,
            Err(_) => return std::ptr::null()
        };
        unsafe { self.sym_impl(csym.as_ptr()) }
    }

    #[cfg(unix)]
    unsafe fn sym_impl(&self, symbol: *const std::os::raw::c_char) -> *const c_void
    {
        dlsym(self.handle, symbol)
    }

    #[cfg(windows)]
    unsafe fn sym_impl(&self, symbol: *const std::os::raw::c_char) -> *const c_void
    {
        GetProcAddress(self.handle, symbol)
    }
}

impl Drop for NativeLibrary
{
    fn drop(&mut self)
    {
        unsafe {
            #[cfg(unix)]
            dlclose(self.handle);
            #[cfg(windows)]
            FreeLibrary(self.handle);
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn missing_library_is_none()
    {
        assert!(NativeLibrary::open("libdoes_not_exist_0x864F.so").is_none());
    }

    #[test]
    fn interior_nul_is_rejected()
    {
        assert!(NativeLibrary::open("lib\0GLESv2.so").is_none());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn open_and_resolve()
    {
        // libm ships everywhere; a driver is not required for this test.
        let lib = NativeLibrary::open("libm.so.6").expect("libm should be loadable");
        assert_eq!(lib.name(), "libm.so.6");
        assert!(!lib.sym("cos").is_null());
        assert!(lib.sym("glNoSuchSymbol").is_null());
    }
}
