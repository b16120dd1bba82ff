use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::blocking::spi::Transfer;
use embedded_hal::digital::v2::{InputPin, OutputPin};
use mockall::mock;

mock! {
    pub SPIBus {}

    impl Transfer<u8> for SPIBus{
        type Error = u32;

        fn transfer<'w>(&mut self, words: &'w mut [u8]) -> Result<&'static [u8], u32>;
    }
}

mock! {
    pub Pin {}

    impl OutputPin for Pin {
        type Error = u32;

        fn set_low(&mut self) -> Result<(), u32>;
        fn set_high(&mut self) -> Result<(), u32>;
    }
}

mock! {
    pub InterruptPin {}

    impl InputPin for InterruptPin {
        type Error = u32;

        fn is_high(&self) -> Result<bool, u32>;
        fn is_low(&self) -> Result<bool, u32>;
    }
}

mock! {
    pub Delay {}

    impl DelayUs<u16> for Delay {
        fn delay_us(&mut self, us: u16);
    }
}
