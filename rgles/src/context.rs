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

use std::cell::RefCell;
use std::ffi::CStr;
use std::marker::PhantomData;
use std::os::raw::c_void;

use gles_sys::functions::GlesExtFunctions;
use gles_sys::{
    GLenum,
    GLint,
    GLubyte,
    GL_EXTENSIONS,
    GL_NUM_EXTENSIONS,
    GL_RENDERER,
    GL_VENDOR,
    GL_VERSION,
    PFNGLGETERRORPROC,
    PFNGLGETINTEGERVPROC,
    PFNGLGETSTRINGIPROC,
    PFNGLGETSTRINGPROC
};
use log::debug;

use crate::capabilities::Capabilities;
use crate::debug::BoxedDebugHandler;
use crate::error::{Error, GlError};
use crate::extensions::ExtensionSet;
use crate::loader::ProcProvider;
use crate::version::Version;

// Entry points every context must export; validated once at load so the
// accessors never re-check.
pub(crate) struct CoreFunctions
{
    pub get_error: PFNGLGETERRORPROC,
    pub get_string: PFNGLGETSTRINGPROC,
    pub get_stringi: Option<PFNGLGETSTRINGIPROC>,
    pub get_integerv: PFNGLGETINTEGERVPROC
}

/// A loaded set of driver bindings for the context current on this thread.
///
/// GL contexts are thread-bound, so this type is neither Send nor Sync; the
/// driver keeps owning every concurrency rule.
pub struct Gles
{
    pub(crate) core: CoreFunctions,
    pub(crate) funcs: GlesExtFunctions,
    pub(crate) caps: Capabilities,
    version: Version,
    pub(crate) debug_handler: RefCell<Option<BoxedDebugHandler>>,
    _not_send: PhantomData<*const ()>
}

impl Gles
{
    /// Loads the driver libraries from their platform locations and binds
    /// against the context current on this thread.
    ///
    /// # Safety
    ///
    /// A GL context must be current on the calling thread and must stay
    /// current (or compatible) for every later call on the returned value.
    pub unsafe fn load() -> Result<Gles, Error>
    {
        let provider = ProcProvider::open()?;
        Self::load_with(|name| provider.lookup(name))
    }

    /// Binds through a caller-supplied resolver instead of the platform
    /// loader; the path used under windowing glue and in tests.
    ///
    /// # Safety
    ///
    /// Every non-null pointer returned by {lookup} must be a valid entry
    /// point of the context current on the calling thread.
    pub unsafe fn load_with<F: FnMut(&str) -> *const c_void>(lookup: F) -> Result<Gles, Error>
    {
        let funcs = GlesExtFunctions::load(lookup);
        let core = CoreFunctions {
            get_error: funcs.glGetError.ok_or(Error::MissingEntryPoint("glGetError"))?,
            get_string: funcs.glGetString.ok_or(Error::MissingEntryPoint("glGetString"))?,
            get_stringi: funcs.glGetStringi,
            get_integerv: funcs.glGetIntegerv.ok_or(Error::MissingEntryPoint("glGetIntegerv"))?
        };
        let raw_version = read_gl_string((core.get_string)(GL_VERSION))
            .ok_or_else(|| Error::BadVersionString("<null>".into()))?;
        let version = Version::parse(&raw_version)?;
        let set = query_extensions(&core, version);
        debug!("context is OpenGL ES {} advertising {} extension(s)", version, set.len());
        let caps = Capabilities::new(set, &funcs);
        Ok(Gles {
            core,
            funcs,
            caps,
            version,
            debug_handler: RefCell::new(None),
            _not_send: PhantomData
        })
    }

    pub fn capabilities(&self) -> &Capabilities
    {
        &self.caps
    }

    pub fn version(&self) -> Version
    {
        self.version
    }

    pub fn vendor(&self) -> String
    {
        self.get_string(GL_VENDOR)
    }

    pub fn renderer(&self) -> String
    {
        self.get_string(GL_RENDERER)
    }

    /// The driver's own error query. Never called behind the caller's back.
    pub fn error(&self) -> Option<GlError>
    {
        GlError::from_raw(unsafe { (self.core.get_error)() })
    }

    fn get_string(&self, name: GLenum) -> String
    {
        read_gl_string(unsafe { (self.core.get_string)(name) }).unwrap_or_default()
    }

    pub(crate) fn get_integer(&self, pname: GLenum) -> GLint
    {
        let mut value: GLint = 0;
        unsafe { (self.core.get_integerv)(pname, &mut value) };
        value
    }

    // Gate every extension entry point on its capability flag; the flag
    // already implies the pointer resolved.
    pub(crate) fn require<T>(&self, func: Option<T>, flag: bool, ext: &'static str) -> Result<T, Error>
    {
        if !flag {
            return Err(Error::ExtensionUnavailable(ext));
        }
        func.ok_or(Error::ExtensionUnavailable(ext))
    }
}

fn query_extensions(core: &CoreFunctions, version: Version) -> ExtensionSet
{
    if version.at_least(3, 0) {
        if let Some(get_stringi) = core.get_stringi {
            let mut count: GLint = 0;
            unsafe { (core.get_integerv)(GL_NUM_EXTENSIONS, &mut count) };
            let names = (0..count.max(0) as u32)
                .filter_map(|i| read_gl_string(unsafe { get_stringi(GL_EXTENSIONS, i) }));
            return ExtensionSet::from_names(names);
        }
    }
    let blob = read_gl_string(unsafe { (core.get_string)(GL_EXTENSIONS) }).unwrap_or_default();
    ExtensionSet::from_list(&blob)
}

// Driver strings are not guaranteed UTF-8; conversion is lossy.
fn read_gl_string(ptr: *const GLubyte) -> Option<String>
{
    if ptr.is_null() {
        return None;
    }
    let cstr = unsafe { CStr::from_ptr(ptr as *const std::os::raw::c_char) };
    Some(String::from_utf8_lossy(cstr.to_bytes()).into_owned())
}

#[cfg(test)]
pub(crate) mod tests
{
    use std::collections::HashMap;
    use std::ffi::CString;

    use gles_sys::*;

    use super::*;

    // A stub driver: just enough state for load_with to complete without
    // any GPU. Entry points read from thread local storage set up by
    // stub_gles.
    thread_local! {
        static VERSION: RefCell<CString> = RefCell::new(CString::new("OpenGL ES 2.0").unwrap());
        static EXTENSIONS: RefCell<CString> = RefCell::new(CString::new("").unwrap());
    }

    unsafe extern "system" fn stub_get_error() -> GLenum
    {
        GL_NO_ERROR
    }

    unsafe extern "system" fn stub_get_string(name: GLenum) -> *const GLubyte
    {
        match name {
            GL_VERSION => VERSION.with(|v| v.borrow().as_ptr() as *const GLubyte),
            GL_EXTENSIONS => EXTENSIONS.with(|v| v.borrow().as_ptr() as *const GLubyte),
            GL_VENDOR => b"BlockProject 3D\0".as_ptr(),
            GL_RENDERER => b"stub renderer\0".as_ptr(),
            _ => std::ptr::null()
        }
    }

    unsafe extern "system" fn stub_get_integerv(_pname: GLenum, data: *mut GLint)
    {
        *data = 0;
    }

    unsafe extern "system" fn stub_noop() {}

    /// Loads a Gles against the stub driver. {extensions} is the advertised
    /// blob; {resolve_exts} controls whether extension symbols resolve.
    pub(crate) fn stub_gles(extensions: &str, resolve_exts: bool) -> Gles
    {
        VERSION.with(|v| *v.borrow_mut() = CString::new("OpenGL ES 2.0").unwrap());
        EXTENSIONS.with(|v| *v.borrow_mut() = CString::new(extensions).unwrap());
        let table: HashMap<&str, *const c_void> = [
            ("glGetError", stub_get_error as *const c_void),
            ("glGetString", stub_get_string as *const c_void),
            ("glGetIntegerv", stub_get_integerv as *const c_void)
        ]
        .into_iter()
        .collect();
        unsafe {
            Gles::load_with(|name| {
                if let Some(ptr) = table.get(name) {
                    *ptr
                } else if resolve_exts && name != "glGetStringi" {
                    stub_noop as *const c_void
                } else {
                    std::ptr::null()
                }
            })
            .expect("stub driver should load")
        }
    }

    #[test]
    fn load_with_requires_core_entry_points()
    {
        let err = unsafe { Gles::load_with(|_| std::ptr::null()) };
        assert!(matches!(err, Err(Error::MissingEntryPoint("glGetError"))));
    }

    #[test]
    fn stub_driver_loads()
    {
        let gl = stub_gles("GL_EXT_sRGB GL_EXT_tessellation_shader", true);
        assert_eq!(gl.version(), Version { major: 2, minor: 0 });
        assert_eq!(gl.vendor(), "BlockProject 3D");
        assert_eq!(gl.renderer(), "stub renderer");
        assert!(gl.capabilities().ext_srgb);
        assert!(gl.capabilities().ext_tessellation_shader);
        assert!(!gl.capabilities().khr_debug);
        assert_eq!(gl.error(), None);
    }

    #[test]
    fn unavailable_extension_is_reported()
    {
        let gl = stub_gles("", true);
        match gl.patch_vertices(3) {
            Err(Error::ExtensionUnavailable(name)) => {
                assert_eq!(name, "GL_EXT_tessellation_shader")
            }
            other => panic!("expected ExtensionUnavailable, got {:?}", other.err())
        }
    }
}
