//! Field-Name Syntax
//!
//! This module documents the bracketed field-name convention the crate
//! understands. A field name encodes both *where* a value lands in the nested
//! result and, optionally, *how* its raw string is typed.
//!
//! # Key Paths
//!
//! Square brackets nest keys, PHP style:
//!
//! ```text
//! name                 => {name: ...}
//! user[name]           => {user: {name: ...}}
//! user[address][city]  => {user: {address: {city: ...}}}
//! ```
//!
//! **Rules**:
//! - The name is split on `[`, and every `]` is removed from each fragment.
//!   Bracket nesting is not validated: `foo[inn[bar]]` flattens to the same
//!   path as `foo[inn][bar]`.
//! - A leading bracket is optional: `[foo][inn]` equals `foo[inn]`.
//! - Keys may be any string, including numeric: `foo[2]` is the object key
//!   `"2"` unless
//!   [`use_int_keys_as_array_index`](crate::BuildOptions::use_int_keys_as_array_index)
//!   is enabled, in which case it is the array index 2 (holes fill with null).
//!
//! # Array Appends
//!
//! An empty bracket pair appends to an array:
//!
//! ```text
//! tags[]        tags[]        => {tags: [v1, v2]}
//! rows[][a]     rows[][b]     => {rows: [{a: v1, b: v2}]}
//! rows[][a]     rows[][a]     => {rows: [{a: v1}, {a: v2}]}
//! ```
//!
//! Consecutive appends group into the last element while it can still take
//! the following key as a fresh property; a repeated key starts a new
//! element. Grouping is therefore order-dependent: entries must be supplied
//! in document order.
//!
//! # Type Suffixes
//!
//! A trailing `:<type>` chooses the value conversion; only the segment after
//! the last colon counts, and it must be one of:
//!
//! | Suffix | Effect |
//! |--------|--------|
//! | `:string` | keep the raw string (opts out of global coercion) |
//! | `:number` | permissive numeric conversion (`""` → 0, garbage → NaN) |
//! | `:boolean` | `true` unless the value is `false`, `null`, `undefined`, `""`, or `0` |
//! | `:null` | those same falsy literals become null; anything else keeps the string |
//! | `:array`, `:object` | parse the value as JSON (errors on malformed input) |
//! | `:skip` | drop the field entirely |
//! | `:auto` | try number, then boolean, then null, then fall back to string |
//!
//! An unrecognized suffix is an error naming the tag and the field; a name
//! with no suffix defers to the [`BuildOptions`](crate::BuildOptions) parse
//! flags, which all default to off.
//!
//! ```text
//! age:number           => {age: 30}
//! active:boolean       => {active: true}
//! config:object        => {config: {...parsed JSON...}}
//! ignored:skip         => (nothing)
//! ```
//!
//! # Flattened Paths
//!
//! The flattener reconstructs these names from a nested structure: object
//! keys as `parent[key]`, array elements as `parent[]` (or `parent[0]`,
//! `parent[1]`, ... with
//! [`array_indices`](crate::FlattenOptions::array_indices)), and with
//! [`bracket_notation`](crate::FlattenOptions::bracket_notation) disabled the
//! array segment is appended bare. Type suffixes are never reconstructed;
//! flattening works on typed values, not raw strings.
