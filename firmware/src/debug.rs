// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(feature = "debug")]
use crate::ports::{DEBUG_BIT, PORTB};

/// Debug pin that is high while this object is alive.
///
/// Only has an effect with the `debug` feature.
pub struct DebugPin(());

impl DebugPin {
    #[inline(always)]
    pub fn high() -> Self {
        #[cfg(feature = "debug")]
        PORTB.set(DEBUG_BIT, true);
        Self(())
    }
}

impl Drop for DebugPin {
    #[inline(always)]
    fn drop(&mut self) {
        #[cfg(feature = "debug")]
        PORTB.set(DEBUG_BIT, false);
    }
}

// vim: ts=4 sw=4 expandtab
