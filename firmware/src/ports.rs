// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{
    hw::mcu,
    mutex::{LazyMainInit, MainInitCtx},
};

/// PA1: IR receiver output. Idles high, active low.
pub const IR_SENSOR_BIT: usize = 1;
/// PB1: Software UART TX. Idles high.
pub const UART_TX_BIT: usize = 1;
/// PB6: Debug pin.
#[cfg_attr(not(feature = "debug"), allow(dead_code))]
pub const DEBUG_BIT: usize = 6;

#[rustfmt::skip]
macro_rules! impl_port {
    (
        $struct:ident,
        $name:ident,
        $port:ident,
        $pin:ident,
        $bit0:ident,
        $bit1:ident,
        $bit2:ident,
        $bit3:ident,
        $bit4:ident,
        $bit5:ident,
        $bit6:ident,
        $bit7:ident
    ) => {
        #[allow(non_snake_case)]
        pub struct $struct {
            pub $name: mcu::$name,
        }

        // SAFETY: Is initialized when constructing the MainCtx.
        pub static $name: LazyMainInit<$struct> = unsafe { LazyMainInit::uninit() };

        impl LazyMainInit<$struct> {
            /// Read the input level of a pin.
            #[inline(always)]
            #[allow(dead_code)]
            pub fn get(&self, bit: usize) -> bool {
                match bit {
                    0 => self.$name.$pin().read().$bit0().bit(),
                    1 => self.$name.$pin().read().$bit1().bit(),
                    2 => self.$name.$pin().read().$bit2().bit(),
                    3 => self.$name.$pin().read().$bit3().bit(),
                    4 => self.$name.$pin().read().$bit4().bit(),
                    5 => self.$name.$pin().read().$bit5().bit(),
                    6 => self.$name.$pin().read().$bit6().bit(),
                    7 => self.$name.$pin().read().$bit7().bit(),
                    _ => unreachable!(),
                }
            }

            /// Set the output level of a pin.
            ///
            /// This is a read-modify-write of the port register.
            /// The caller must not race with other writers of the same port.
            #[inline(always)]
            #[allow(dead_code)]
            pub fn set(&self, bit: usize, value: bool) {
                match bit {
                    0 => self.$name.$port().modify(|_, w| w.$bit0().bit(value)),
                    1 => self.$name.$port().modify(|_, w| w.$bit1().bit(value)),
                    2 => self.$name.$port().modify(|_, w| w.$bit2().bit(value)),
                    3 => self.$name.$port().modify(|_, w| w.$bit3().bit(value)),
                    4 => self.$name.$port().modify(|_, w| w.$bit4().bit(value)),
                    5 => self.$name.$port().modify(|_, w| w.$bit5().bit(value)),
                    6 => self.$name.$port().modify(|_, w| w.$bit6().bit(value)),
                    7 => self.$name.$port().modify(|_, w| w.$bit7().bit(value)),
                    _ => unreachable!(),
                };
            }
        }
    };
}

impl_port!(PortA, PORTA, porta, pina, pa0, pa1, pa2, pa3, pa4, pa5, pa6, pa7);
impl_port!(PortB, PORTB, portb, pinb, pb0, pb1, pb2, pb3, pb4, pb5, pb6, pb7);

fn pin_input(_bit: usize) -> u8 {
    0
}
fn pin_output(bit: usize) -> u8 {
    1 << bit
}
fn pin_low(_bit: usize) -> u8 {
    0
}
fn pin_high(bit: usize) -> u8 {
    1 << bit
}
fn pin_floating(_bit: usize) -> u8 {
    0
}

impl PortA {
    pub fn setup(&self, _: &MainInitCtx) {
        // SAFETY: Called with interrupts disabled. Ensured by &MainInitCtx.
        unsafe {
            self.PORTA.porta().write(|w| {
                w.bits(
                    pin_low(0) | // DNC
                    pin_floating(1) | // IR receiver, has internal pullup
                    pin_low(2) | // DNC
                    pin_low(3) | // DNC
                    pin_low(4) | // DNC
                    pin_low(5) | // DNC
                    pin_low(6) | // DNC
                    pin_low(7), // DNC
                )
            });
            self.PORTA.ddra().write(|w| {
                w.bits(
                    pin_output(0) | // DNC
                    pin_input(1) | // IR receiver
                    pin_output(2) | // DNC
                    pin_output(3) | // DNC
                    pin_output(4) | // DNC
                    pin_output(5) | // DNC
                    pin_output(6) | // DNC
                    pin_output(7), // DNC
                )
            });
        }
    }
}

impl PortB {
    pub fn setup(&self, _: &MainInitCtx) {
        // SAFETY: Called with interrupts disabled. Ensured by &MainInitCtx.
        unsafe {
            self.PORTB.portb().write(|w| {
                w.bits(
                    pin_low(0) | // ISP MOSI
                    pin_high(1) | // ISP MISO + UART TX, idle high
                    pin_low(2) | // ISP SCK
                    pin_low(3) | // DNC
                    pin_floating(4) | // XTAL1
                    pin_floating(5) | // XTAL2
                    pin_low(6) | // Debug
                    pin_floating(7), // RESET, Debug-Wire
                )
            });
            self.PORTB.ddrb().write(|w| {
                w.bits(
                    pin_input(0) | // ISP MOSI
                    pin_output(1) | // ISP MISO + UART TX
                    pin_input(2) | // ISP SCK
                    pin_output(3) | // DNC
                    pin_input(4) | // XTAL1
                    pin_input(5) | // XTAL2
                    pin_output(6) | // Debug
                    pin_input(7), // RESET, Debug-Wire
                )
            });
        }
    }
}

// vim: ts=4 sw=4 expandtab
