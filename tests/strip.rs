mod tests {
    use myrtio_ws2812_draw::{ConfigError, LinkSpeed, Rgb, Strip, StripState, WriteError};
    use smart_leds::SmartLedsWrite;

    #[test]
    fn test_configure_2p5mhz() {
        let mut colors = [0u8; 30];
        let mut waveform = [0u8; 90];
        let mut strip = Strip::new(&mut colors, &mut waveform, 10);
        assert_eq!(strip.state(), StripState::Failed);
        assert_eq!(strip.configure(LinkSpeed::Mhz2_5), Ok(()));
        assert_eq!(strip.state(), StripState::Ready(LinkSpeed::Mhz2_5));
    }

    #[test]
    fn test_configure_5mhz_needs_larger_waveform() {
        let mut colors = [0u8; 30];
        let mut waveform = [0u8; 90];
        let mut strip = Strip::new(&mut colors, &mut waveform, 10);
        assert_eq!(
            strip.configure(LinkSpeed::Mhz5),
            Err(ConfigError::WaveformBufferTooSmall {
                required: 180,
                capacity: 90
            })
        );
        assert_eq!(strip.state(), StripState::Failed);
    }

    #[test]
    fn test_configure_color_buffer_too_small() {
        let mut colors = [0u8; 29];
        let mut waveform = [0u8; 180];
        let mut strip = Strip::new(&mut colors, &mut waveform, 10);
        assert_eq!(
            strip.configure(LinkSpeed::Mhz2_5),
            Err(ConfigError::ColorBufferTooSmall {
                required: 30,
                capacity: 29
            })
        );
    }

    #[test]
    fn test_failed_strip_blocks_writes_and_encoding() {
        let mut colors = [0u8; 30];
        let mut waveform = [0u8; 89];
        let mut strip = Strip::new(&mut colors, &mut waveform, 10);
        assert!(strip.configure(LinkSpeed::Mhz2_5).is_err());
        assert_eq!(strip.state(), StripState::Failed);

        assert_eq!(
            strip.write_range(1, 10, Rgb::new(1, 2, 3)),
            Err(WriteError::NotConfigured)
        );
        strip.encode();
        myrtio_ws2812_draw::encoder::encode(&mut strip, LinkSpeed::Mhz2_5);
        assert!(strip.waveform().is_empty());

        drop(strip);
        assert!(colors.iter().all(|byte| *byte == 0));
        assert!(waveform.iter().all(|byte| *byte == 0));
    }

    #[test]
    fn test_reconfigure_after_failure() {
        let mut colors = [0u8; 30];
        let mut waveform = [0u8; 180];
        let mut strip = Strip::new(&mut colors, &mut waveform, 10);
        assert!(strip.configure(LinkSpeed::Mhz2_5).is_ok());
        assert!(strip.configure(LinkSpeed::Mhz5).is_ok());
        assert_eq!(strip.speed(), Some(LinkSpeed::Mhz5));
    }

    #[test]
    fn test_write_range_grb_order() {
        let mut colors = [0u8; 15];
        let mut waveform = [0u8; 45];
        let mut strip = Strip::new(&mut colors, &mut waveform, 5);
        strip.configure(LinkSpeed::Mhz2_5).unwrap();

        assert_eq!(strip.write_range(2, 2, Rgb::new(10, 20, 30)), Ok(()));
        assert_eq!(strip.color_at(2), Some(Rgb::new(10, 20, 30)));
        assert_eq!(strip.color_at(4), Some(Rgb::default()));

        drop(strip);
        assert_eq!(
            colors,
            [0, 0, 0, 20, 10, 30, 20, 10, 30, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_write_range_bounds() {
        let mut colors = [0u8; 15];
        let mut waveform = [0u8; 45];
        let mut strip = Strip::new(&mut colors, &mut waveform, 5);
        strip.configure(LinkSpeed::Mhz2_5).unwrap();

        let color = Rgb::new(1, 1, 1);
        assert_eq!(strip.write_range(0, 1, color), Err(WriteError::StartOutOfRange));
        assert_eq!(strip.write_range(5, 2, color), Err(WriteError::RangeOutOfBounds));
        assert_eq!(strip.write_one(6, color), Err(WriteError::RangeOutOfBounds));
        assert_eq!(strip.write_range(2, 0, color), Ok(()));
        assert_eq!(strip.write_one(5, color), Ok(()));
        assert!(strip.colors()[..12].iter().all(|byte| *byte == 0));
    }

    #[test]
    fn test_write_all_then_clear_all() {
        let mut colors = [0u8; 30];
        let mut waveform = [0u8; 90];
        let mut strip = Strip::new(&mut colors, &mut waveform, 10);
        strip.configure(LinkSpeed::Mhz2_5).unwrap();

        strip.write_range(1, 10, Rgb::new(255, 128, 7)).unwrap();
        assert!(strip.colors().iter().all(|byte| *byte != 0));
        strip.clear_all().unwrap();
        assert!(strip.colors().iter().all(|byte| *byte == 0));
    }

    #[test]
    fn test_smart_leds_write_encodes() {
        let mut colors = [0u8; 6];
        let mut waveform = [0u8; 18];
        let mut strip = Strip::new(&mut colors, &mut waveform, 2);
        strip.configure(LinkSpeed::Mhz2_5).unwrap();

        strip.write([Rgb::new(0, 0, 0), Rgb::new(0, 0, 0)]).unwrap();
        // Every zero bit becomes 100
        assert!(
            strip
                .waveform()
                .chunks(3)
                .all(|chunk| chunk == [0b1001_0010, 0b0100_1001, 0b0010_0100])
        );

        assert_eq!(
            strip.write([Rgb::new(1, 1, 1); 3]),
            Err(WriteError::RangeOutOfBounds)
        );
    }

    #[test]
    fn test_smart_leds_write_overflow_still_encodes() {
        let mut colors = [0u8; 6];
        let mut waveform = [0u8; 18];
        let mut strip = Strip::new(&mut colors, &mut waveform, 2);
        strip.configure(LinkSpeed::Mhz2_5).unwrap();

        assert_eq!(
            strip.write([Rgb::new(255, 255, 255); 3]),
            Err(WriteError::RangeOutOfBounds)
        );
        // Both LEDs were written and encoded as all ones: 110 repeated
        assert!(strip.colors().iter().all(|byte| *byte == 0xFF));
        assert!(
            strip
                .waveform()
                .chunks(3)
                .all(|chunk| chunk == [0b1101_1011, 0b0110_1101, 0b1011_0110])
        );
    }

    #[test]
    fn test_unconfigured_huge_strip_reads_empty() {
        let mut colors = [0u8; 3];
        let mut waveform = [0u8; 9];
        let strip = Strip::new(&mut colors, &mut waveform, usize::MAX);
        assert_eq!(strip.colors().len(), 3);
        assert!(strip.waveform().is_empty());
        assert_eq!(strip.color_at(1), Some(Rgb::default()));
    }
}
