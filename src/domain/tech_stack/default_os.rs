//! Default OS propagation from the technology stack to VM rows.
//!
//! When an operating system is selected in the stack, VM rows whose OS
//! still looks like a placeholder take the new "product version" value.
//! Rows with a custom OS are never touched, and VM edits never flow back
//! into the selection.

use crate::domain::draft::{Rows, VirtualMachine};

/// OS values treated as placeholders when matched exactly.
pub const GENERIC_OS_LABELS: [&str; 2] = ["Linux", "Windows Server"];

/// OS families whose values are treated as placeholders when contained.
pub const GENERIC_OS_FAMILIES: [&str; 5] = ["Debian", "Ubuntu", "RHEL", "Rocky", "Alma"];

/// True when a VM's OS value is empty or one of the known generic labels.
pub fn looks_default(os: &str) -> bool {
    os.is_empty()
        || GENERIC_OS_LABELS.contains(&os)
        || GENERIC_OS_FAMILIES.iter().any(|family| os.contains(family))
}

/// Rewrites the OS of every default-looking VM to `os_choice`.
/// Returns the number of rows rewritten.
pub fn derive_default_os(vms: &mut Rows<VirtualMachine>, os_choice: &str) -> usize {
    let mut rewritten = 0;
    for vm in vms.values_mut() {
        if looks_default(&vm.os) && vm.os != os_choice {
            vm.os = os_choice.to_string();
            rewritten += 1;
        }
    }
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vm_with_os(os: &str) -> VirtualMachine {
        VirtualMachine {
            os: os.to_string(),
            ..VirtualMachine::default()
        }
    }

    #[test]
    fn placeholder_values_look_default() {
        assert!(looks_default(""));
        assert!(looks_default("Linux"));
        assert!(looks_default("Windows Server"));
        assert!(looks_default("Debian 11 (Bullseye)"));
        assert!(looks_default("Ubuntu Server 22.04 LTS"));
        assert!(looks_default("AlmaLinux 9"));
    }

    #[test]
    fn custom_values_do_not_look_default() {
        assert!(!looks_default("Custom-OS-X"));
        assert!(!looks_default("   "));
        assert!(!looks_default("FreeBSD 14"));
        assert!(!looks_default("Windows Server 2022"));
    }

    #[test]
    fn empty_os_takes_the_choice() {
        let mut vms: Rows<VirtualMachine> = [vm_with_os("")].into_iter().collect();
        assert_eq!(derive_default_os(&mut vms, "Debian 12"), 1);
        assert_eq!(vms.get(0).unwrap().value().os, "Debian 12");
    }

    #[test]
    fn blank_os_counts_as_custom() {
        let mut vms: Rows<VirtualMachine> = [vm_with_os("   ")].into_iter().collect();
        assert_eq!(derive_default_os(&mut vms, "Debian 12"), 0);
        assert_eq!(vms.get(0).unwrap().value().os, "   ");
    }

    #[test]
    fn custom_os_is_left_untouched() {
        let mut vms: Rows<VirtualMachine> =
            [vm_with_os("Custom-OS-X"), vm_with_os("Linux")].into_iter().collect();

        assert_eq!(derive_default_os(&mut vms, "Debian 12"), 1);

        let oses: Vec<_> = vms.values().map(|vm| vm.os.as_str()).collect();
        assert_eq!(oses, vec!["Custom-OS-X", "Debian 12"]);
    }

    #[test]
    fn later_choice_overwrites_previously_derived_value() {
        let mut vms: Rows<VirtualMachine> = [vm_with_os("Linux")].into_iter().collect();
        derive_default_os(&mut vms, "Debian 12 (Bookworm)");
        derive_default_os(&mut vms, "Rocky Linux 9");
        assert_eq!(vms.get(0).unwrap().value().os, "Rocky Linux 9");
    }
}
