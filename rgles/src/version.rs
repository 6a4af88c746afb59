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

use crate::error::Error;

/// Client API version parsed from the GL_VERSION string.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Version
{
    pub major: u32,
    pub minor: u32
}

// The registry allows "OpenGL ES N.M vendor-info", the Common/Common-Lite
// 1.x forms "OpenGL ES-CM N.M" / "OpenGL ES-CL N.M", and a bare "N.M".
const PREFIXES: [&str; 3] = ["OpenGL ES-CM ", "OpenGL ES-CL ", "OpenGL ES "];

impl Version
{
    pub fn parse(raw: &str) -> Result<Version, Error>
    {
        let mut rest = raw;
        for prefix in PREFIXES {
            if let Some(stripped) = rest.strip_prefix(prefix) {
                rest = stripped;
                break;
            }
        }
        let number = rest.split_whitespace().next().unwrap_or("");
        let mut parts = number.splitn(3, '.');
        let major = parts
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| Error::BadVersionString(raw.into()))?;
        let minor = parts
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| Error::BadVersionString(raw.into()))?;
        Ok(Version { major, minor })
    }

    pub fn at_least(&self, major: u32, minor: u32) -> bool
    {
        self.major > major || (self.major == major && self.minor >= minor)
    }
}

impl std::fmt::Display for Version
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result
    {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn standard_forms()
    {
        assert_eq!(Version::parse("OpenGL ES 3.2").unwrap(), Version { major: 3, minor: 2 });
        assert_eq!(
            Version::parse("OpenGL ES 3.1 Mesa 22.0.1").unwrap(),
            Version { major: 3, minor: 1 }
        );
        assert_eq!(Version::parse("OpenGL ES-CM 1.1").unwrap(), Version { major: 1, minor: 1 });
        assert_eq!(Version::parse("2.0").unwrap(), Version { major: 2, minor: 0 });
    }

    #[test]
    fn patch_digit_is_ignored()
    {
        assert_eq!(
            Version::parse("OpenGL ES 3.0.5 vendor build").unwrap(),
            Version { major: 3, minor: 0 }
        );
    }

    #[test]
    fn malformed_is_rejected()
    {
        assert!(Version::parse("").is_err());
        assert!(Version::parse("OpenGL ES").is_err());
        assert!(Version::parse("Direct3D 11").is_err());
        assert!(Version::parse("OpenGL ES x.y").is_err());
    }

    #[test]
    fn ordering()
    {
        let v = Version::parse("OpenGL ES 3.1").unwrap();
        assert!(v.at_least(3, 0));
        assert!(v.at_least(3, 1));
        assert!(v.at_least(2, 0));
        assert!(!v.at_least(3, 2));
    }
}
