//! Raw `<fenv.h>` bindings.
//!
//! This is the only module in the crate that contains `unsafe`. It declares the two C
//! functions the gateway needs and the native `FE_*` encodings for the current target.
//!
//! The encodings are the values each platform's `<fenv.h>` defines; they are bit patterns
//! of the hardware control register and therefore differ between architectures:
//!
//! | Target                    | TONEAREST | TOWARDZERO  | DOWNWARD    | UPWARD      |
//! |---------------------------|-----------|-------------|-------------|-------------|
//! | x86 / x86_64 (MXCSR, x87) | `0x0`     | `0xC00`     | `0x400`     | `0x800`     |
//! | Windows UCRT              | `0x0`     | `0x300`     | `0x200`     | `0x100`     |
//! | AArch64 / ARM (FPCR)      | `0x0`     | `0xC00000`  | `0x800000`  | `0x400000`  |
//! | RISC-V (`frm`)            | `0`       | `1`         | `2`         | `3`         |
//! | PowerPC / s390x / MIPS    | `0`       | `1`         | `3`         | `2`         |
//! | LoongArch (`fcsr`)        | `0x0`     | `0x100`     | `0x300`     | `0x200`     |
//!
//! The build script normally reads these values out of the target's own `<fenv.h>`
//! through the C preprocessor (`cfg(fenv_from_header)`). The table above is the fallback
//! when no C toolchain is available; targets outside it then fail to compile instead of
//! guessing.

use libc::c_int;

// glibc and the BSDs ship the fenv functions in libm; on musl and macOS `-lm` resolves
// to the C library itself. The Windows UCRT exports them from the default CRT.
#[cfg_attr(unix, link(name = "m"))]
unsafe extern "C" {
    /// Returns the active rounding mode, or a negative value if it cannot be determined.
    pub fn fegetround() -> c_int;

    /// Installs `round` as the active rounding mode. Returns zero on success.
    pub fn fesetround(round: c_int) -> c_int;
}

#[cfg(fenv_from_header)]
mod encoding {
    use libc::c_int;

    include!(concat!(env!("OUT_DIR"), "/fenv_codes.rs"));
}

#[cfg(all(not(fenv_from_header), windows, target_env = "msvc"))]
mod encoding {
    use libc::c_int;

    pub const FE_TONEAREST: c_int = 0x0000;
    pub const FE_UPWARD: c_int = 0x0100;
    pub const FE_DOWNWARD: c_int = 0x0200;
    pub const FE_TOWARDZERO: c_int = 0x0300;
}

#[cfg(all(
    not(fenv_from_header),
    any(target_arch = "x86", target_arch = "x86_64"),
    not(all(windows, target_env = "msvc"))
))]
mod encoding {
    use libc::c_int;

    pub const FE_TONEAREST: c_int = 0x0000;
    pub const FE_DOWNWARD: c_int = 0x0400;
    pub const FE_UPWARD: c_int = 0x0800;
    pub const FE_TOWARDZERO: c_int = 0x0C00;
}

#[cfg(all(
    not(fenv_from_header),
    any(target_arch = "aarch64", target_arch = "arm"),
    not(all(windows, target_env = "msvc"))
))]
mod encoding {
    use libc::c_int;

    pub const FE_TONEAREST: c_int = 0x00000000;
    pub const FE_UPWARD: c_int = 0x00400000;
    pub const FE_DOWNWARD: c_int = 0x00800000;
    pub const FE_TOWARDZERO: c_int = 0x00C00000;
}

#[cfg(all(
    not(fenv_from_header),
    any(target_arch = "riscv32", target_arch = "riscv64")
))]
mod encoding {
    use libc::c_int;

    pub const FE_TONEAREST: c_int = 0;
    pub const FE_TOWARDZERO: c_int = 1;
    pub const FE_DOWNWARD: c_int = 2;
    pub const FE_UPWARD: c_int = 3;
}

#[cfg(all(
    not(fenv_from_header),
    any(
        target_arch = "powerpc",
        target_arch = "powerpc64",
        target_arch = "s390x",
        target_arch = "mips",
        target_arch = "mips64"
    )
))]
mod encoding {
    use libc::c_int;

    pub const FE_TONEAREST: c_int = 0;
    pub const FE_TOWARDZERO: c_int = 1;
    pub const FE_UPWARD: c_int = 2;
    pub const FE_DOWNWARD: c_int = 3;
}

#[cfg(all(not(fenv_from_header), target_arch = "loongarch64"))]
mod encoding {
    use libc::c_int;

    pub const FE_TONEAREST: c_int = 0x000;
    pub const FE_TOWARDZERO: c_int = 0x100;
    pub const FE_UPWARD: c_int = 0x200;
    pub const FE_DOWNWARD: c_int = 0x300;
}

#[cfg(all(
    not(fenv_from_header),
    not(any(
        all(windows, target_env = "msvc"),
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "arm",
        target_arch = "riscv32",
        target_arch = "riscv64",
        target_arch = "powerpc",
        target_arch = "powerpc64",
        target_arch = "s390x",
        target_arch = "mips",
        target_arch = "mips64",
        target_arch = "loongarch64"
    ))
))]
compile_error!(
    "roundmode-core could not read <fenv.h> and has no built-in rounding-mode table for this target"
);

/// `FE_TONEAREST`: round to nearest, ties to even.
pub const FE_TONEAREST: c_int = encoding::FE_TONEAREST;
/// `FE_TOWARDZERO`: truncate toward zero.
pub const FE_TOWARDZERO: c_int = encoding::FE_TOWARDZERO;
/// `FE_DOWNWARD`: round toward negative infinity.
pub const FE_DOWNWARD: c_int = encoding::FE_DOWNWARD;
/// `FE_UPWARD`: round toward positive infinity.
pub const FE_UPWARD: c_int = encoding::FE_UPWARD;

/// Calls `fegetround` for the current thread.
#[inline]
pub(crate) fn get_round() -> c_int {
    // SAFETY: fegetround takes no arguments, touches only the calling thread's
    // floating-point control register and has no preconditions.
    unsafe { fegetround() }
}

/// Calls `fesetround` for the current thread and returns its raw status.
#[inline]
pub(crate) fn set_round(round: c_int) -> c_int {
    // SAFETY: fesetround validates `round` itself and returns non-zero without
    // modifying the environment when the code is not supported. Any integer is a
    // valid argument.
    unsafe { fesetround(round) }
}
