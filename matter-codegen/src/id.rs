/*
 * Copyright (c) 2024 Project CHIP Authors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Identifier derivations shared by all emission rules: how IDL names
//! become Rust constant/variant/field names and how channel ids, labels
//! and constant names are derived from cluster and attribute names.

use convert_case::{Case, Casing};

/// Rust keywords an IDL-derived snake-case name could collide with.
const KEYWORDS: &[&str] = &[
    "as", "box", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern", "false",
    "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use",
    "where", "while",
];

/// Converts an IDL identifier (like `kFoo`) into a name suitable for
/// constants based on Rust guidelines.
///
/// Examples:
///
/// ```
/// use matter_codegen::id::constant_name;
///
/// assert_eq!(constant_name("kAbc"), "ABC");
/// assert_eq!(constant_name("kAbcXyz"), "ABC_XYZ");
/// assert_eq!(constant_name("kCOAlarm"), "CO_ALARM");
/// ```
pub fn constant_name(s: &str) -> String {
    let name = s.strip_prefix('k').unwrap_or(s).to_case(Case::UpperSnake);
    let first = name.chars().next().unwrap();
    if !first.is_alphabetic() {
        format!("C{}", name)
    } else {
        name
    }
}

/// Converts an IDL identifier (like `kFoo`) into an enum variant name.
///
/// Examples:
///
/// ```
/// use matter_codegen::id::enum_variant_name;
///
/// assert_eq!(enum_variant_name("kAbc"), "Abc");
/// assert_eq!(enum_variant_name("kCOAlarm"), "COAlarm");
/// ```
pub fn enum_variant_name(s: &str) -> String {
    let name = s.strip_prefix('k').unwrap_or(s).to_string();
    let first = name.chars().next().unwrap();
    if !first.is_alphabetic() {
        format!("V{}", name)
    } else {
        name
    }
}

/// The label the specification-facing surface carries for a constant:
/// the stripped identifier, title-cased.
///
/// Examples:
///
/// ```
/// use matter_codegen::id::label;
///
/// assert_eq!(label("kDelayedOffFastFade"), "Delayed Off Fast Fade");
/// assert_eq!(label("smokeState"), "Smoke State");
/// ```
pub fn label(s: &str) -> String {
    // strip the `k` prefix only on constant-style names (`kFoo`), not on
    // camelCase attribute names that happen to start with a `k`
    let stripped = match s.strip_prefix('k') {
        Some(rest) if rest.chars().next().is_some_and(|c| c.is_ascii_uppercase()) => rest,
        _ => s,
    };
    stripped.to_case(Case::Title)
}

/// Converts a camelCase IDL field or command name into a snake_case Rust
/// name, guarding against keyword collisions (`Move` becomes `move_`).
///
/// Examples:
///
/// ```
/// use matter_codegen::id::field_name;
///
/// assert_eq!(field_name("onOffControl"), "on_off_control");
/// assert_eq!(field_name("Move"), "move_");
/// ```
pub fn field_name(s: &str) -> String {
    let name = s.to_case(Case::Snake);
    if KEYWORDS.contains(&name.as_str()) {
        format!("{}_", name)
    } else {
        name
    }
}

/// Converts an IDL attribute name into its ID-enum variant name: the
/// name with the first character upper-cased.
///
/// Examples:
///
/// ```
/// use matter_codegen::id::attribute_variant_name;
///
/// assert_eq!(attribute_variant_name("smokeState"), "SmokeState");
/// assert_eq!(attribute_variant_name("interconnectCOAlarm"), "InterconnectCOAlarm");
/// ```
pub fn attribute_variant_name(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// The module name for a cluster.
pub fn module_name(cluster: &str) -> String {
    cluster.to_case(Case::Snake)
}

/// The channel id of an attribute:
/// `lowercase(cluster) + "-" + lowercase(attribute)`.
///
/// Examples:
///
/// ```
/// use matter_codegen::id::channel_id;
///
/// assert_eq!(channel_id("SmokeCoAlarm", "smokeState"), "smokecoalarm-smokestate");
/// assert_eq!(channel_id("OnOff", "onOff"), "onoff-onoff");
/// ```
pub fn channel_id(cluster: &str, attribute: &str) -> String {
    format!("{}-{}", cluster.to_lowercase(), attribute.to_lowercase())
}

/// The constant name of a channel tuple:
/// `CHANNEL_<CLUSTER>_<ATTRIBUTE>` in upper snake case.
///
/// Examples:
///
/// ```
/// use matter_codegen::id::channel_constant_name;
///
/// assert_eq!(
///     channel_constant_name("SmokeCoAlarm", "smokeState"),
///     "CHANNEL_SMOKE_CO_ALARM_SMOKE_STATE"
/// );
/// ```
pub fn channel_constant_name(cluster: &str, attribute: &str) -> String {
    format!(
        "CHANNEL_{}_{}",
        cluster.to_case(Case::UpperSnake),
        attribute.to_case(Case::UpperSnake)
    )
}

/// The constant name of a cluster's channel table.
pub fn cluster_constant_name(cluster: &str) -> String {
    cluster.to_case(Case::UpperSnake)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_guard() {
        assert_eq!(field_name("type"), "type_");
        assert_eq!(field_name("Toggle"), "toggle");
    }

    #[test]
    fn channel_derivations() {
        assert_eq!(
            channel_id("LevelControl", "startUpCurrentLevel"),
            "levelcontrol-startupcurrentlevel"
        );
        assert_eq!(
            channel_constant_name("OnOff", "globalSceneControl"),
            "CHANNEL_ON_OFF_GLOBAL_SCENE_CONTROL"
        );
        assert_eq!(cluster_constant_name("SmokeCoAlarm"), "SMOKE_CO_ALARM");
        assert_eq!(label("interconnectCOAlarm"), "Interconnect Co Alarm");
    }
}
