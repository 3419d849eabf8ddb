use crate::{
    debug::DebugPin,
    hw::{FCPU, mcu},
    mutex::{CriticalSection, IrqCtx, LazyMainInit, MainInitCtx},
    remote,
};
use irsampler::{BAUD, SAMPLE_RATE_HZ, TickPeriod, ctc_top};

const SAMPLE_PS: u32 = 1;
const SAMPLE_OCR: u32 = ctc_top(FCPU, SAMPLE_PS, SAMPLE_RATE_HZ);

const BIT_PS: u32 = 8;
const BIT_OCR: u32 = ctc_top(FCPU, BIT_PS, BAUD);

// Timer/Counter0 runs in 8 bit mode.
const _: () = assert!(SAMPLE_OCR <= 0xFF && BIT_OCR <= 0xFF);

#[allow(non_snake_case)]
pub struct Dp {
    pub TC0: mcu::TC0,
}

// SAFETY: Is initialized when constructing the MainCtx.
pub static DP: LazyMainInit<Dp> = unsafe { LazyMainInit::uninit() };

impl Dp {
    /// Timer/Counter0 configuration:
    /// 8 bit, clear timer on OCR0A compare match. Stopped.
    #[rustfmt::skip]
    pub fn setup(&self, _: &MainInitCtx) {
        self.TC0.tccr0b().write(|w| w);
        self.TC0.tccr0a().write(|w| w.ctc0().set_bit());
        self.TC0.tcnt0h().write(|w| w);
        self.TC0.tcnt0l().write(|w| w);
        self.TC0.ocr0a().write(|w| w.set(0xFF));
        self.TC0.tifr().write(|w| w.ocf0a().set_bit());
        self.TC0.timsk().modify(|_, w| w.ocie0a().set_bit());
    }
}

/// Start the periodic tick.
///
/// The first tick happens one full period after this call.
#[rustfmt::skip]
pub fn timer_start(_cs: CriticalSection<'_>, period: TickPeriod) {
    DP.TC0.tccr0b().write(|w| w);
    DP.TC0.tcnt0l().write(|w| w);
    match period {
        TickPeriod::Sample => {
            DP.TC0.ocr0a().write(|w| w.set(SAMPLE_OCR as u8));
            DP.TC0.tifr().write(|w| w.ocf0a().set_bit());
            DP.TC0.tccr0b().write(|w| w.cs0().direct());
        }
        TickPeriod::Bit => {
            DP.TC0.ocr0a().write(|w| w.set(BIT_OCR as u8));
            DP.TC0.tifr().write(|w| w.ocf0a().set_bit());
            DP.TC0.tccr0b().write(|w| w.cs0().prescale_8());
        }
    }
}

/// Stop the periodic tick.
/// The configuration is kept.
pub fn timer_stop(_cs: CriticalSection<'_>) {
    DP.TC0.tccr0b().write(|w| w);
    DP.TC0.tifr().write(|w| w.ocf0a().set_bit());
}

pub fn irq_handler_timer0_compa(c: &IrqCtx) {
    let _dbg = DebugPin::high();
    remote::irq_handler_tick(c);
}

// vim: ts=4 sw=4 expandtab
