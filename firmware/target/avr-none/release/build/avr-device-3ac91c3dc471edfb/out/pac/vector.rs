#[doc(hidden)]
#[macro_export]
macro_rules! __avr_device_trampoline {
    (@attiny861a, RESET, $it:item) => {
        #[export_name = "__vector_0"]
        $it
    };
    (@attiny861a, INT0, $it:item) => {
        #[export_name = "__vector_1"]
        $it
    };
    (@attiny861a, PCINT, $it:item) => {
        #[export_name = "__vector_2"]
        $it
    };
    (@attiny861a, TIMER1_COMPA, $it:item) => {
        #[export_name = "__vector_3"]
        $it
    };
    (@attiny861a, TIMER1_COMPB, $it:item) => {
        #[export_name = "__vector_4"]
        $it
    };
    (@attiny861a, TIMER1_OVF, $it:item) => {
        #[export_name = "__vector_5"]
        $it
    };
    (@attiny861a, TIMER0_OVF, $it:item) => {
        #[export_name = "__vector_6"]
        $it
    };
    (@attiny861a, USI_START, $it:item) => {
        #[export_name = "__vector_7"]
        $it
    };
    (@attiny861a, USI_OVF, $it:item) => {
        #[export_name = "__vector_8"]
        $it
    };
    (@attiny861a, EE_RDY, $it:item) => {
        #[export_name = "__vector_9"]
        $it
    };
    (@attiny861a, ANA_COMP, $it:item) => {
        #[export_name = "__vector_10"]
        $it
    };
    (@attiny861a, ADC, $it:item) => {
        #[export_name = "__vector_11"]
        $it
    };
    (@attiny861a, WDT, $it:item) => {
        #[export_name = "__vector_12"]
        $it
    };
    (@attiny861a, INT1, $it:item) => {
        #[export_name = "__vector_13"]
        $it
    };
    (@attiny861a, TIMER0_COMPA, $it:item) => {
        #[export_name = "__vector_14"]
        $it
    };
    (@attiny861a, TIMER0_COMPB, $it:item) => {
        #[export_name = "__vector_15"]
        $it
    };
    (@attiny861a, TIMER0_CAPT, $it:item) => {
        #[export_name = "__vector_16"]
        $it
    };
    (@attiny861a, TIMER1_COMPD, $it:item) => {
        #[export_name = "__vector_17"]
        $it
    };
    (@attiny861a, FAULT_PROTECTION, $it:item) => {
        #[export_name = "__vector_18"]
        $it
    };
    (@$mcu:ident, $name:ident, $it:item) => {
        compile_error!(concat!("Couldn't find interrupt ", stringify!($name), ", for MCU ", stringify!($mcu), "."));
    }
}
