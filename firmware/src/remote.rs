// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{
    exint::EXINT,
    hw::interrupt,
    mutex::{CriticalSection, IrqCtx, MainCtx, Mutex, unwrap_result},
    ports::{IR_SENSOR_BIT, PORTA, PORTB, UART_TX_BIT},
    timer::{timer_start, timer_stop},
};
use avr_atomic::AvrAtomic;
use core::cell::RefCell;
use irsampler::{HEADER, IrRemote, RemoteHw, TickEvent, TickPeriod};

static REMOTE: Mutex<RefCell<IrRemote>> = Mutex::new(RefCell::new(IrRemote::new(HEADER)));

/// Set by the timer interrupt when the sample buffer is full.
static TX_READY: AvrAtomic<bool> = AvrAtomic::new();

/// The MCU peripherals used by the remote state machine.
///
/// Only exists with interrupts disabled.
struct McuHw<'cs> {
    cs: CriticalSection<'cs>,
}

impl<'cs> McuHw<'cs> {
    #[inline(always)]
    fn new(cs: CriticalSection<'cs>) -> Self {
        Self { cs }
    }
}

impl RemoteHw for McuHw<'_> {
    #[inline(always)]
    fn read_input(&mut self) -> bool {
        PORTA.get(IR_SENSOR_BIT)
    }

    #[inline(always)]
    fn set_tx(&mut self, level: bool) {
        PORTB.set(UART_TX_BIT, level);
    }

    fn timer_start(&mut self, period: TickPeriod) {
        timer_start(self.cs, period);
    }

    fn timer_stop(&mut self) {
        timer_stop(self.cs);
    }

    fn edge_disable(&mut self) {
        EXINT.disable();
    }

    fn edge_clear_pending(&mut self) {
        EXINT.clear_pending();
    }

    fn edge_enable(&mut self) {
        EXINT.enable();
    }
}

fn with_remote<F, R>(cs: CriticalSection<'_>, f: F) -> R
where
    F: FnOnce(&mut IrRemote, &mut McuHw<'_>) -> R,
{
    let mut remote = unwrap_result(REMOTE.borrow(cs).try_borrow_mut());
    let mut hw = McuHw::new(cs);
    f(&mut remote, &mut hw)
}

/// Falling edge on the IR receiver.
pub fn irq_handler_edge(c: &IrqCtx) {
    with_remote(c.cs(), |remote, hw| {
        remote.on_edge(hw);
    });
}

/// Sample or bit period tick.
pub fn irq_handler_tick(c: &IrqCtx) {
    let ev = with_remote(c.cs(), |remote, hw| remote.on_tick(hw));
    if ev == TickEvent::SamplingDone {
        TX_READY.store(true);
    }
}

/// Main loop step.
///
/// Start the transmission of a completed capture.
pub fn remote_run(_m: &MainCtx<'_>) {
    if TX_READY.load() {
        interrupt::free(|cs| {
            TX_READY.store(false);
            with_remote(cs, |remote, hw| {
                remote.poll(hw);
            });
        });
    }
}

// vim: ts=4 sw=4 expandtab
