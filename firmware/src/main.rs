#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]
#![feature(asm_experimental_arch)]

mod debug;
mod exint;
mod hw;
mod mutex;
mod ports;
mod remote;
mod timer;

use crate::{
    exint::{EXINT, ExInt},
    hw::{Peripherals, interrupt, mcu},
    mutex::{MainCtx, MainInitCtx, unwrap_option},
    ports::{PORTA, PORTB, PortA, PortB},
    remote::remote_run,
};

fn wdt_init() {
    // SAFETY: The asm code only accesses the WDT registers
    //         which are not accessed from anywhere else in the program.
    unsafe {
        // Enable WDT with timeout 32.5 ms
        core::arch::asm!(
            "ldi {tmp}, 0x10", // WDCE=1
            "out {WDTCR}, {tmp}",
            "ldi {tmp}, 0x19", // WDCE=1, WDE=1, WDP2=0, WDP1=0, WDP0=1
            "out {WDTCR}, {tmp}",
            tmp = out(reg_upper) _,
            WDTCR = const 0x21,
            options(nostack, preserves_flags)
        );
    }
}

fn wdt_poke(_wp: &mcu::WDT) {
    avr_device::asm::wdr();
}

#[avr_device::entry]
fn main() -> ! {
    wdt_init();

    let dp = unwrap_option(Peripherals::take());

    let init_static_vars = |c: &MainInitCtx| {
        PORTA.init(c, PortA { PORTA: dp.PORTA });
        PORTB.init(c, PortB { PORTB: dp.PORTB });
        timer::DP.init(c, timer::Dp { TC0: dp.TC0 });
        EXINT.init(c, ExInt { EXINT: dp.EXINT });

        // The UART TX line goes high here and stays high until the first capture.
        PORTA.setup(c);
        PORTB.setup(c);
        timer::DP.setup(c);
        EXINT.setup(c);
    };

    // SAFETY:
    //
    // This is the context handle for the main() function.
    // Holding a reference to this object proves that the holder
    // is running in main() context.
    let m = unsafe { MainCtx::new_with_init(init_static_vars) };

    // SAFETY: This must be after construction of MainCtx
    //         and after initialization of static LazyMainInit variables.
    unsafe { interrupt::enable() };

    loop {
        remote_run(&m);
        wdt_poke(&dp.WDT);
    }
}

// vim: ts=4 sw=4 expandtab
