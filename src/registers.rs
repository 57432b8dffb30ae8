//! Register definitions for the FXAS21002C
//!
//! This module contains the register definitions for the FXAS21002C gyroscope.
//! Unlike banked devices, the FXAS21002C has a single flat register map at
//! addresses 0x00-0x15. Multi-byte sample data is big-endian (MSB register
//! first), which matches the device's auto-increment burst-read order.

device_driver::create_device!(
    device_name: Fxas21002c,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = BE;
        }

        /// STATUS - Alias Register (0x00)
        /// Mirrors DR_STATUS when the FIFO is disabled, F_STATUS otherwise.
        register Status {
            const ADDRESS = 0x00;
            const SIZE_BITS = 8;

            /// X-axis data ready
            x_dr: bool = 0,
            /// Y-axis data ready
            y_dr: bool = 1,
            /// Z-axis data ready
            z_dr: bool = 2,
            /// X, Y, Z combined data ready
            zyx_dr: bool = 3,
            /// X-axis data overwrite
            x_ow: bool = 4,
            /// Y-axis data overwrite
            y_ow: bool = 5,
            /// Z-axis data overwrite
            z_ow: bool = 6,
            /// X, Y, Z combined data overwrite
            zyx_ow: bool = 7,
        },

        /// OUT_X_MSB - X-axis Angular Rate High Byte (0x01)
        register OutXMsb {
            const ADDRESS = 0x01;
            const SIZE_BITS = 8;

            /// X-axis sample high byte
            out_x_msb: uint = 0..8,
        },

        /// OUT_X_LSB - X-axis Angular Rate Low Byte (0x02)
        register OutXLsb {
            const ADDRESS = 0x02;
            const SIZE_BITS = 8;

            /// X-axis sample low byte
            out_x_lsb: uint = 0..8,
        },

        /// OUT_Y_MSB - Y-axis Angular Rate High Byte (0x03)
        register OutYMsb {
            const ADDRESS = 0x03;
            const SIZE_BITS = 8;

            /// Y-axis sample high byte
            out_y_msb: uint = 0..8,
        },

        /// OUT_Y_LSB - Y-axis Angular Rate Low Byte (0x04)
        register OutYLsb {
            const ADDRESS = 0x04;
            const SIZE_BITS = 8;

            /// Y-axis sample low byte
            out_y_lsb: uint = 0..8,
        },

        /// OUT_Z_MSB - Z-axis Angular Rate High Byte (0x05)
        register OutZMsb {
            const ADDRESS = 0x05;
            const SIZE_BITS = 8;

            /// Z-axis sample high byte
            out_z_msb: uint = 0..8,
        },

        /// OUT_Z_LSB - Z-axis Angular Rate Low Byte (0x06)
        register OutZLsb {
            const ADDRESS = 0x06;
            const SIZE_BITS = 8;

            /// Z-axis sample low byte
            out_z_lsb: uint = 0..8,
        },

        /// DR_STATUS - Data Ready Status (0x07)
        register DrStatus {
            const ADDRESS = 0x07;
            const SIZE_BITS = 8;

            /// X-axis data ready
            x_dr: bool = 0,
            /// Y-axis data ready
            y_dr: bool = 1,
            /// Z-axis data ready
            z_dr: bool = 2,
            /// X, Y, Z combined data ready
            zyx_dr: bool = 3,
            /// X-axis data overwrite
            x_ow: bool = 4,
            /// Y-axis data overwrite
            y_ow: bool = 5,
            /// Z-axis data overwrite
            z_ow: bool = 6,
            /// X, Y, Z combined data overwrite
            zyx_ow: bool = 7,
        },

        /// F_STATUS - FIFO Status (0x08)
        register FStatus {
            const ADDRESS = 0x08;
            const SIZE_BITS = 8;

            /// FIFO sample count
            f_cnt: uint = 0..6,
            /// FIFO watermark event
            f_wmkf: bool = 6,
            /// FIFO overflow event
            f_ovf: bool = 7,
        },

        /// F_SETUP - FIFO Setup (0x09)
        register FSetup {
            const ADDRESS = 0x09;
            const SIZE_BITS = 8;

            /// FIFO watermark sample count
            f_wmrk: uint = 0..6,
            /// FIFO mode (0=disabled, 1=circular, 2=stop on overflow)
            f_mode: uint = 6..8,
        },

        /// F_EVENT - FIFO Event (0x0A)
        register FEvent {
            const ADDRESS = 0x0A;
            const SIZE_BITS = 8;

            /// Elapsed sample periods since the event was asserted
            fe_time: uint = 0..5,
            /// FIFO event detected
            f_event: bool = 5,
            reserved_7_6: uint = 6..8,
        },

        /// INT_SRC_FLAG - Interrupt Source (0x0B)
        register IntSrcFlag {
            const ADDRESS = 0x0B;
            const SIZE_BITS = 8;

            /// Data-ready event pending
            src_drdy: bool = 0,
            /// Rate-threshold event pending
            src_rt: bool = 1,
            /// FIFO event pending
            src_fifo: bool = 2,
            /// Boot sequence complete
            boot_end: bool = 3,
            reserved_7_4: uint = 4..8,
        },

        /// WHO_AM_I - Device ID Register (0x0C)
        /// Expected value: 0xD7
        register WhoAmI {
            const ADDRESS = 0x0C;
            const SIZE_BITS = 8;

            /// Device ID (should read 0xD7)
            who_am_i: uint = 0..8,
        },

        /// CTRL_REG0 - Control 0: range, filtering, SPI mode (0x0D)
        register CtrlReg0 {
            const ADDRESS = 0x0D;
            const SIZE_BITS = 8;

            /// Full-scale range select (0=±2000, 1=±1000, 2=±500, 3=±250 °/s)
            fs: uint = 0..2,
            /// High-pass filter enable
            hpf_en: bool = 2,
            /// High-pass filter cutoff select
            sel: uint = 3..5,
            /// SPI wire mode (false=4-wire, true=3-wire)
            spiw: bool = 5,
            /// Low-pass filter bandwidth select
            bw: uint = 6..8,
        },

        /// RT_CFG - Rate Threshold Configuration (0x0E)
        register RtCfg {
            const ADDRESS = 0x0E;
            const SIZE_BITS = 8;

            /// X-axis rate threshold event enable
            xtefe: bool = 0,
            /// Y-axis rate threshold event enable
            ytefe: bool = 1,
            /// Z-axis rate threshold event enable
            ztefe: bool = 2,
            /// Event latch enable
            ele: bool = 3,
            reserved_7_4: uint = 4..8,
        },

        /// RT_SRC - Rate Threshold Source (0x0F)
        register RtSrc {
            const ADDRESS = 0x0F;
            const SIZE_BITS = 8;

            /// X-axis event polarity (true=negative)
            x_rt_pol: bool = 0,
            /// X-axis rate threshold event
            x_rt: bool = 1,
            /// Y-axis event polarity (true=negative)
            y_rt_pol: bool = 2,
            /// Y-axis rate threshold event
            y_rt: bool = 3,
            /// Z-axis event polarity (true=negative)
            z_rt_pol: bool = 4,
            /// Z-axis rate threshold event
            z_rt: bool = 5,
            /// Any-axis event active
            ea: bool = 6,
            reserved_7: uint = 7..8,
        },

        /// RT_THS - Rate Threshold (0x10)
        register RtThs {
            const ADDRESS = 0x10;
            const SIZE_BITS = 8;

            /// Unsigned 7-bit threshold; rate threshold = THS * FSR / 128
            ths: uint = 0..7,
            /// Debounce counter mode (true=clear, false=decrement)
            dbcntm: bool = 7,
        },

        /// RT_COUNT - Rate Threshold Debounce Count (0x11)
        register RtCount {
            const ADDRESS = 0x11;
            const SIZE_BITS = 8;

            /// Debounce sample count
            count: uint = 0..8,
        },

        /// TEMP - Internal Temperature (0x12)
        /// Signed 8-bit, 1 °C/LSB, no offset.
        register Temp {
            const ADDRESS = 0x12;
            const SIZE_BITS = 8;

            /// Raw temperature code (two's complement)
            temp: uint = 0..8,
        },

        /// CTRL_REG1 - Control 1: data rate and operating mode (0x13)
        register CtrlReg1 {
            const ADDRESS = 0x13;
            const SIZE_BITS = 8;

            /// Ready mode select
            ready: bool = 0,
            /// Active mode select (data acquisition enabled)
            active: bool = 1,
            /// Output data rate select (0=800Hz .. 7=12.5Hz)
            dr: uint = 2..5,
            /// Self-test enable
            st: bool = 5,
            /// Software reset
            rst: bool = 6,
            reserved_7: uint = 7..8,
        },

        /// CTRL_REG2 - Control 2: interrupt routing (0x14)
        register CtrlReg2 {
            const ADDRESS = 0x14;
            const SIZE_BITS = 8;

            /// Interrupt pin output driver (false=push-pull, true=open-drain)
            pp_od: bool = 0,
            /// Interrupt polarity (true=active high)
            ipol: bool = 1,
            /// Data-ready interrupt enable
            int_en_drdy: bool = 2,
            /// Data-ready interrupt routing (true=INT1, false=INT2)
            int_cfg_drdy: bool = 3,
            /// Rate-threshold interrupt enable
            int_en_rt: bool = 4,
            /// Rate-threshold interrupt routing (true=INT1, false=INT2)
            int_cfg_rt: bool = 5,
            /// FIFO interrupt enable
            int_en_fifo: bool = 6,
            /// FIFO interrupt routing (true=INT1, false=INT2)
            int_cfg_fifo: bool = 7,
        },

        /// CTRL_REG3 - Control 3: range expansion, auto-increment (0x15)
        register CtrlReg3 {
            const ADDRESS = 0x15;
            const SIZE_BITS = 8;

            /// Full-scale range expansion enable (doubles every range)
            fs_double: bool = 0,
            reserved_1: uint = 1..2,
            /// External power control input enable
            extctrlen: bool = 2,
            /// Burst-read address wrap to OUT_X_MSB instead of STATUS
            wraptoone: bool = 3,
            reserved_7_4: uint = 4..8,
        }
    }
);
