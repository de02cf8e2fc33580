// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn verbose_lowers_default_level() {
    assert_eq!(default_directive(false), "warn");
    assert_eq!(default_directive(true), "debug");
}

#[test]
fn init_twice_does_not_panic() {
    init(false);
    init(true);
}
