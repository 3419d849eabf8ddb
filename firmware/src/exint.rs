use crate::{
    hw::mcu,
    mutex::{IrqCtx, LazyMainInit, MainInitCtx},
    ports::{IR_SENSOR_BIT, PORTA},
    remote,
};

#[allow(non_snake_case)]
pub struct ExInt {
    pub EXINT: mcu::EXINT,
}

// SAFETY: Is initialized when constructing the MainCtx.
pub static EXINT: LazyMainInit<ExInt> = unsafe { LazyMainInit::uninit() };

const PCINT_ENA_0: bool = false;
const PCINT_ENA_1: bool = true; // PA1: IR receiver.
const PCINT_ENA_2: bool = false;
const PCINT_ENA_3: bool = false;
const PCINT_ENA_4: bool = false;
const PCINT_ENA_5: bool = false;
const PCINT_ENA_6: bool = false;
const PCINT_ENA_7: bool = false;

impl ExInt {
    #[allow(clippy::identity_op)]
    pub fn setup(&self, _: &MainInitCtx) {
        self.EXINT.pcmsk0().write(|w| {
            w.set(
                ((PCINT_ENA_0 as u8) << 0)
                    | ((PCINT_ENA_1 as u8) << 1)
                    | ((PCINT_ENA_2 as u8) << 2)
                    | ((PCINT_ENA_3 as u8) << 3)
                    | ((PCINT_ENA_4 as u8) << 4)
                    | ((PCINT_ENA_5 as u8) << 5)
                    | ((PCINT_ENA_6 as u8) << 6)
                    | ((PCINT_ENA_7 as u8) << 7),
            )
        });
        self.EXINT.pcmsk1().write(|w| w.set(0));
        self.clear_pending();
        self.enable();
    }

    /// Enable the pin change interrupt.
    #[inline(always)]
    pub fn enable(&self) {
        self.EXINT.gimsk().write(|w| w.pcie().set(0x3));
    }

    /// Disable the pin change interrupt.
    /// Pin changes are still latched in the flag register.
    #[inline(always)]
    pub fn disable(&self) {
        self.EXINT.gimsk().write(|w| w.pcie().set(0));
    }

    /// Clear a latched pin change.
    #[inline(always)]
    pub fn clear_pending(&self) {
        self.EXINT.gifr().write(|w| w.pcif().set_bit());
    }
}

pub fn irq_handler_pcint(c: &IrqCtx) {
    // The pin change interrupt fires on both edges.
    // The IR receiver output is active low. Low after a change is a falling edge.
    if !PORTA.get(IR_SENSOR_BIT) {
        remote::irq_handler_edge(c);
    }
}

// vim: ts=4 sw=4 expandtab
