//! FFI bindings for the Mach host statistics and sysctl calls used by the
//! memory sampler.
//!
//! Only macOS provides these symbols. Elsewhere the same functions exist but
//! report [`Error::NotAvailable`], which the sampler turns into a zero
//! snapshot like any other kernel query failure.

use crate::error::{Error, Result};
use crate::memory::PageCounts;

#[cfg(target_os = "macos")]
mod darwin {
    use std::ffi::c_void;

    pub const KERN_SUCCESS: i32 = 0;
    pub const HOST_VM_INFO64: i32 = 4;
    pub const HOST_VM_INFO64_COUNT: u32 =
        (std::mem::size_of::<vm_statistics64>() / std::mem::size_of::<i32>()) as u32;

    pub type HostInfoT = *mut i32;
    pub type MachPortT = u32;

    #[repr(C)]
    #[derive(Debug, Default)]
    #[allow(non_camel_case_types)]
    pub struct vm_statistics64 {
        pub free_count: u32,
        pub active_count: u32,
        pub inactive_count: u32,
        pub wire_count: u32,
        pub zero_fill_count: u64,
        pub reactivations: u64,
        pub pageins: u64,
        pub pageouts: u64,
        pub faults: u64,
        pub cow_faults: u64,
        pub lookups: u64,
        pub hits: u64,
        pub purges: u64,
        pub purgeable_count: u32,
        pub speculative_count: u32,
        pub decompressions: u64,
        pub compressions: u64,
        pub swapins: u64,
        pub swapouts: u64,
        pub compressor_page_count: u32,
        pub throttled_count: u32,
        pub external_page_count: u32,
        pub internal_page_count: u32,
        pub total_uncompressed_pages_in_compressor: u64,
    }

    extern "C" {
        pub static vm_kernel_page_size: usize;

        pub fn host_statistics64(
            host_priv: MachPortT,
            flavor: i32,
            host_info_out: HostInfoT,
            host_info_out_cnt: *mut u32,
        ) -> i32;

        pub fn mach_host_self() -> MachPortT;
    }

    pub fn sysctl_u64(name: &[u8]) -> Option<u64> {
        let mut value = 0u64;
        let mut len = std::mem::size_of::<u64>();

        // SAFETY: `name` is NUL-terminated and `value`/`len` describe a valid u64 buffer.
        let result = unsafe {
            libc::sysctlbyname(
                name.as_ptr().cast(),
                &mut value as *mut u64 as *mut c_void,
                &mut len,
                std::ptr::null_mut(),
                0,
            )
        };

        (result == 0).then_some(value)
    }
}

/// Queries `host_statistics64(HOST_VM_INFO64)` and returns the page counts
#[cfg(target_os = "macos")]
pub(crate) fn host_page_counts() -> Result<PageCounts> {
    use darwin::*;

    let mut info = vm_statistics64::default();
    let mut count = HOST_VM_INFO64_COUNT;

    // SAFETY: `info` is a correctly sized, writable vm_statistics64 and `count`
    // holds its length in integer_t units as the call requires.
    let kern_result = unsafe {
        host_statistics64(
            mach_host_self(),
            HOST_VM_INFO64,
            (&mut info as *mut vm_statistics64) as HostInfoT,
            &mut count,
        )
    };

    if kern_result != KERN_SUCCESS {
        return Err(Error::system(format!("host_statistics64 failed: {}", kern_result)));
    }

    Ok(PageCounts {
        free: u64::from(info.free_count),
        active: u64::from(info.active_count),
        inactive: u64::from(info.inactive_count),
        wired: u64::from(info.wire_count),
        compressed: u64::from(info.compressor_page_count),
        external: u64::from(info.external_page_count),
    })
}

/// Returns the kernel's VM page size in bytes
#[cfg(target_os = "macos")]
pub(crate) fn kernel_page_size() -> Result<u64> {
    // SAFETY: vm_kernel_page_size is a read-only global initialised by the kernel.
    let size = unsafe { darwin::vm_kernel_page_size } as u64;
    if size == 0 {
        return Err(Error::system("vm_kernel_page_size reported 0"));
    }
    Ok(size)
}

/// Returns `hw.memsize`, the installed physical memory in bytes
#[cfg(target_os = "macos")]
pub(crate) fn physical_memory() -> Result<u64> {
    darwin::sysctl_u64(b"hw.memsize\0").ok_or_else(|| Error::system("sysctl hw.memsize failed"))
}

#[cfg(not(target_os = "macos"))]
pub(crate) fn host_page_counts() -> Result<PageCounts> {
    Err(Error::not_available("host_statistics64 requires macOS"))
}

#[cfg(not(target_os = "macos"))]
pub(crate) fn kernel_page_size() -> Result<u64> {
    Err(Error::not_available("vm_kernel_page_size requires macOS"))
}

#[cfg(not(target_os = "macos"))]
pub(crate) fn physical_memory() -> Result<u64> {
    Err(Error::not_available("hw.memsize requires macOS"))
}
