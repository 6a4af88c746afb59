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

use std::collections::HashSet;

/// Set of extension name strings advertised by the current context.
#[derive(Clone, Debug, Default)]
pub struct ExtensionSet
{
    names: HashSet<String>
}

impl ExtensionSet
{
    /// Splits the space-separated GL_EXTENSIONS blob (ES 2.0 query path).
    /// Duplicates collapse; any whitespace acts as a separator.
    pub fn from_list(raw: &str) -> ExtensionSet
    {
        ExtensionSet {
            names: raw.split_whitespace().map(String::from).collect()
        }
    }

    /// Collects per-index names (ES 3.0 GetStringi query path).
    pub fn from_names<I: IntoIterator<Item = String>>(names: I) -> ExtensionSet
    {
        ExtensionSet {
            names: names.into_iter().collect()
        }
    }

    pub fn contains(&self, name: &str) -> bool
    {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize
    {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str>
    {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn basic_list()
    {
        let set = ExtensionSet::from_list(
            "GL_EXT_tessellation_shader GL_KHR_debug GL_OES_vertex_array_object"
        );
        assert_eq!(set.len(), 3);
        assert!(set.contains("GL_KHR_debug"));
        assert!(!set.contains("GL_KHR_debu"));
    }

    #[test]
    fn empty_and_blank()
    {
        assert!(ExtensionSet::from_list("").is_empty());
        assert!(ExtensionSet::from_list("   \t \n ").is_empty());
    }

    #[test]
    fn duplicates_collapse()
    {
        let set = ExtensionSet::from_list("GL_EXT_sRGB GL_EXT_sRGB  GL_EXT_sRGB");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn from_names_matches_from_list()
    {
        let a = ExtensionSet::from_names(vec![
            "GL_EXT_sRGB".to_string(),
            "GL_KHR_debug".to_string()
        ]);
        let b = ExtensionSet::from_list("GL_KHR_debug GL_EXT_sRGB");
        assert_eq!(a.len(), b.len());
        assert!(a.iter().all(|n| b.contains(n)));
    }

    proptest! {
        // Whatever whitespace the driver pads the blob with, the parsed set
        // holds exactly the advertised names.
        #[test]
        fn whitespace_never_changes_the_set(
            names in proptest::collection::hash_set("GL_[A-Z]{2,4}_[a-z_]{1,16}", 0..16),
            seps in proptest::collection::vec("[ \t\n]{1,3}", 0..17)
        )
        {
            let mut blob = String::new();
            for (i, name) in names.iter().enumerate() {
                blob.push_str(seps.get(i).map(String::as_str).unwrap_or(" "));
                blob.push_str(name);
            }
            let set = ExtensionSet::from_list(&blob);
            prop_assert_eq!(set.len(), names.len());
            for name in &names {
                prop_assert!(set.contains(name));
            }
        }
    }
}
