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

use clap::{Arg, ArgMatches, Command};
use cli_common::{alloc_verbosity_level, init_bp3d_logger};
use log::{error, info};
use regex::Regex;

const PROG_NAME: &str = env!("CARGO_PKG_NAME");
const PROG_VERSION: &str = env!("CARGO_PKG_VERSION");

fn list(args: &ArgMatches) -> i32 {
    let filter = match args.value_of("filter").map(Regex::new) {
        Some(Err(e)) => {
            error!("Invalid filter: {}", e);
            return 1;
        },
        Some(Ok(v)) => Some(v),
        None => None
    };
    for ext in gles_registry::extensions() {
        if filter.as_ref().map(|re| re.is_match(ext.name)).unwrap_or(true) {
            println!(
                "{} ({} token(s), {} command(s))",
                ext.name,
                ext.tokens.len(),
                ext.commands.len()
            );
        }
    }
    0
}

fn show(args: &ArgMatches) -> i32 {
    let name = args.value_of("extension").unwrap();
    let ext = match gles_registry::find(name) {
        Some(v) => v,
        None => {
            error!("Unknown extension: {}", name);
            return 1;
        }
    };
    println!("{}", ext.name);
    if !ext.tokens.is_empty() {
        println!("Tokens:");
        for tok in ext.tokens {
            println!("    {} = 0x{:04X}", tok.name, tok.value);
        }
    }
    if !ext.commands.is_empty() {
        println!("Commands:");
        for cmd in ext.commands {
            println!("    {}", cmd);
        }
    }
    0
}

fn parse_value(query: &str) -> Option<u32> {
    if let Some(hex) = query.strip_prefix("0x").or_else(|| query.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16).ok();
    }
    query.parse().ok()
}

fn token(args: &ArgMatches) -> i32 {
    let query = args.value_of("token").unwrap();
    if let Some(value) = gles_registry::token_by_name(query) {
        println!("{} = 0x{:04X}", query, value);
        return 0;
    }
    let value = match parse_value(query) {
        Some(v) => v,
        None => {
            error!("Unknown token: {}", query);
            return 1;
        }
    };
    let hits = gles_registry::tokens_by_value(value);
    if hits.is_empty() {
        error!("No token has value 0x{:04X}", value);
        return 1;
    }
    for (ext, tok) in hits {
        println!("{} = 0x{:04X} ({})", tok.name, tok.value, ext.name);
    }
    0
}

fn run() -> i32 {
    let matches = Command::new(PROG_NAME)
        .author("BlockProject 3D")
        .about("BlockProject 3D SDK - OpenGL ES Extension Browser")
        .version(PROG_VERSION)
        .subcommand_required(true)
        .subcommands([
            Command::new("list").about("List the bound extensions")
                .args([
                    Arg::new("filter").short('f').long("filter").takes_value(true)
                        .help("Only list extensions whose name matches this regex")
                ]),
            Command::new("show").about("Show the tokens and commands of one extension")
                .args([
                    Arg::new("extension").required(true).takes_value(true)
                        .help("Registry name, e.g. GL_EXT_tessellation_shader")
                ]),
            Command::new("token").about("Look up a token by name or by value")
                .args([
                    Arg::new("token").required(true).takes_value(true)
                        .help("Token name, or a decimal/0x-prefixed value")
                ])
        ])
        .args([
            Arg::new("verbose").short('v').long("verbose").multiple_occurrences(true)
                .help("Enable verbose output")
        ]).get_matches();
    alloc_verbosity_level(matches.occurrences_of("verbose"));
    info!("Initializing BlockProject 3D OpenGL ES Extension Browser...");
    if let Some(args) = matches.subcommand_matches("list") {
        return list(args);
    }
    if let Some(args) = matches.subcommand_matches("show") {
        return show(args);
    }
    if let Some(args) = matches.subcommand_matches("token") {
        return token(args);
    }
    0
}

fn main() {
    init_bp3d_logger(PROG_NAME, run);
}

#[cfg(test)]
mod tests
{
    use super::parse_value;

    #[test]
    fn value_parsing()
    {
        assert_eq!(parse_value("0x8E72"), Some(0x8E72));
        assert_eq!(parse_value("0X8e72"), Some(0x8E72));
        assert_eq!(parse_value("7"), Some(7));
        assert_eq!(parse_value("GL_PATCHES_EXT"), None);
    }
}
