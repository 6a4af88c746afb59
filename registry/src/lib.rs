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

//! Registry metadata for the bound extension catalog: token names, token
//! values and command names per extension, as published by Khronos. The
//! binding crates are checked against this data, not the other way around.

mod data;

use serde::Serialize;

pub use data::EXTENSIONS;

/// One enum token of an extension specification.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct Token
{
    pub name: &'static str,
    pub value: u32
}

/// One extension of the catalog.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct Extension
{
    /// Registry name, e.g. "GL_EXT_tessellation_shader".
    pub name: &'static str,
    pub tokens: &'static [Token],
    pub commands: &'static [&'static str]
}

pub fn extensions() -> &'static [Extension]
{
    &EXTENSIONS
}

pub fn find(name: &str) -> Option<&'static Extension>
{
    data::BY_NAME.get(name).copied()
}

/// Exact-name token lookup across every extension.
pub fn token_by_name(name: &str) -> Option<u32>
{
    EXTENSIONS
        .iter()
        .flat_map(|ext| ext.tokens)
        .find(|tok| tok.name == name)
        .map(|tok| tok.value)
}

/// Tokens sharing {value}; registry values are unique within an extension
/// but may repeat across the catalog.
pub fn tokens_by_value(value: u32) -> Vec<(&'static Extension, &'static Token)>
{
    let mut out = Vec::new();
    for ext in &EXTENSIONS {
        for tok in ext.tokens {
            if tok.value == value {
                out.push((ext, tok));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn lookup_by_name()
    {
        let ext = find("GL_EXT_tessellation_shader").unwrap();
        assert_eq!(ext.name, "GL_EXT_tessellation_shader");
        assert!(ext.commands.contains(&"glPatchParameteriEXT"));
        assert!(find("GL_EXT_does_not_exist").is_none());
    }

    #[test]
    fn token_lookup()
    {
        assert_eq!(token_by_name("GL_PATCH_VERTICES_EXT"), Some(0x8E72));
        assert_eq!(token_by_name("GL_DEPTH_CLAMP_EXT"), Some(0x864F));
        assert_eq!(token_by_name("GL_NOT_A_TOKEN"), None);
    }

    #[test]
    fn value_lookup_finds_shared_values()
    {
        let hits = tokens_by_value(0x8E72);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].1.name, "GL_PATCH_VERTICES_EXT");
        assert!(tokens_by_value(0xFFFF_FFF0).is_empty());
    }

    #[test]
    fn every_extension_is_indexed()
    {
        for ext in extensions() {
            assert!(ext.name.starts_with("GL_"), "{} lacks the GL_ prefix", ext.name);
            let found = find(ext.name).unwrap();
            assert_eq!(found.name, ext.name);
        }
    }

    #[test]
    fn token_names_are_unique()
    {
        let mut seen = std::collections::HashSet::new();
        for ext in extensions() {
            for tok in ext.tokens {
                assert!(seen.insert(tok.name), "{} appears twice", tok.name);
            }
        }
    }

    #[test]
    fn command_names_are_unique()
    {
        let mut seen = std::collections::HashSet::new();
        for ext in extensions() {
            for cmd in ext.commands {
                assert!(seen.insert(*cmd), "{} appears twice", cmd);
            }
        }
    }
}
