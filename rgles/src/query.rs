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

//! GL_EXT_disjoint_timer_query wrappers.

use gles_sys::exts::*;
use gles_sys::{GLenum, GLint, GLsizei, GLuint64, GL_TRUE};

use crate::context::Gles;
use crate::error::Error;

/// Targets a timer query can record.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QueryTarget
{
    TimeElapsed,
    Timestamp
}

impl QueryTarget
{
    pub fn into_raw(self) -> GLenum
    {
        match self {
            QueryTarget::TimeElapsed => GL_TIME_ELAPSED_EXT,
            QueryTarget::Timestamp => GL_TIMESTAMP_EXT
        }
    }
}

impl Gles
{
    pub fn gen_queries(&self, count: usize) -> Result<Vec<u32>, Error>
    {
        let func = self.require(
            self.funcs.glGenQueriesEXT,
            self.caps.ext_disjoint_timer_query,
            EXT_DISJOINT_TIMER_QUERY
        )?;
        let mut ids = vec![0u32; count];
        unsafe { func(count as GLsizei, ids.as_mut_ptr()) };
        Ok(ids)
    }

    pub fn delete_queries(&self, ids: &[u32]) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glDeleteQueriesEXT,
            self.caps.ext_disjoint_timer_query,
            EXT_DISJOINT_TIMER_QUERY
        )?;
        unsafe { func(ids.len() as GLsizei, ids.as_ptr()) };
        Ok(())
    }

    pub fn is_query(&self, id: u32) -> Result<bool, Error>
    {
        let func = self.require(
            self.funcs.glIsQueryEXT,
            self.caps.ext_disjoint_timer_query,
            EXT_DISJOINT_TIMER_QUERY
        )?;
        Ok(unsafe { func(id) } == GL_TRUE)
    }

    /// Starts scoped time measurement; only TimeElapsed is a valid scope.
    pub fn begin_query(&self, id: u32) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glBeginQueryEXT,
            self.caps.ext_disjoint_timer_query,
            EXT_DISJOINT_TIMER_QUERY
        )?;
        unsafe { func(GL_TIME_ELAPSED_EXT, id) };
        Ok(())
    }

    pub fn end_query(&self) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glEndQueryEXT,
            self.caps.ext_disjoint_timer_query,
            EXT_DISJOINT_TIMER_QUERY
        )?;
        unsafe { func(GL_TIME_ELAPSED_EXT) };
        Ok(())
    }

    /// Records the GPU timestamp into {id} without scoping.
    pub fn query_counter(&self, id: u32) -> Result<(), Error>
    {
        let func = self.require(
            self.funcs.glQueryCounterEXT,
            self.caps.ext_disjoint_timer_query,
            EXT_DISJOINT_TIMER_QUERY
        )?;
        unsafe { func(id, GL_TIMESTAMP_EXT) };
        Ok(())
    }

    /// Number of bits the driver resolves for {target}; zero means the
    /// target is unsupported by the counter.
    pub fn query_counter_bits(&self, target: QueryTarget) -> Result<i32, Error>
    {
        let func = self.require(
            self.funcs.glGetQueryivEXT,
            self.caps.ext_disjoint_timer_query,
            EXT_DISJOINT_TIMER_QUERY
        )?;
        let mut bits: GLint = 0;
        unsafe { func(target.into_raw(), GL_QUERY_COUNTER_BITS_EXT, &mut bits) };
        Ok(bits)
    }

    pub fn query_result_available(&self, id: u32) -> Result<bool, Error>
    {
        let func = self.require(
            self.funcs.glGetQueryObjectuivEXT,
            self.caps.ext_disjoint_timer_query,
            EXT_DISJOINT_TIMER_QUERY
        )?;
        let mut available: u32 = 0;
        unsafe { func(id, GL_QUERY_RESULT_AVAILABLE_EXT, &mut available) };
        Ok(available != 0)
    }

    /// Blocks in the driver until the result is ready; pair with
    /// [Gles::query_result_available] to poll instead.
    pub fn query_result_u64(&self, id: u32) -> Result<u64, Error>
    {
        let func = self.require(
            self.funcs.glGetQueryObjectui64vEXT,
            self.caps.ext_disjoint_timer_query,
            EXT_DISJOINT_TIMER_QUERY
        )?;
        let mut value: GLuint64 = 0;
        unsafe { func(id, GL_QUERY_RESULT_EXT, &mut value) };
        Ok(value)
    }

    /// True when the GPU clock was disjoint (power event, throttle) since
    /// the last time this was queried; in-flight timings are then invalid.
    pub fn gpu_disjoint(&self) -> Result<bool, Error>
    {
        if !self.caps.ext_disjoint_timer_query {
            return Err(Error::ExtensionUnavailable(EXT_DISJOINT_TIMER_QUERY));
        }
        Ok(self.get_integer(GL_GPU_DISJOINT_EXT) != 0)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::context::tests::stub_gles;

    #[test]
    fn targets_map_to_registry_values()
    {
        assert_eq!(QueryTarget::TimeElapsed.into_raw(), 0x88BF);
        assert_eq!(QueryTarget::Timestamp.into_raw(), 0x8E28);
    }

    #[test]
    fn queries_gate_on_the_extension()
    {
        let gl = stub_gles("", true);
        assert!(matches!(
            gl.gen_queries(2),
            Err(Error::ExtensionUnavailable("GL_EXT_disjoint_timer_query"))
        ));
        assert!(matches!(
            gl.gpu_disjoint(),
            Err(Error::ExtensionUnavailable("GL_EXT_disjoint_timer_query"))
        ));
    }

    #[test]
    fn disjoint_flag_reads_through_get_integerv()
    {
        // The stub returns zero for every integer query.
        let gl = stub_gles("GL_EXT_disjoint_timer_query", true);
        assert_eq!(gl.gpu_disjoint().unwrap(), false);
    }
}
