wire_enum!(
    AfterApplyGuidance {
        RestartHvm => "restartHVM",
        RestartPv => "restartPV",
        RestartHost => "restartHost",
        RestartXapi => "restartXAPI",
    }
);

wire_enum!(
    BondMode {
        BalanceSlb => "balance-slb",
        ActiveBackup => "active-backup",
        Lacp => "lacp",
    }
);

wire_enum!(
    /// Class of objects a message can refer to.
    Cls {
        Vm => "VM",
        Host => "Host",
        Sr => "SR",
        Pool => "Pool",
        Vmpp => "VMPP",
    }
);

wire_enum!(
    ConsoleProtocol {
        Vt100 => "vt100",
        Rfb => "rfb",
        Rdp => "rdp",
    }
);

wire_enum!(
    EventOperation {
        Add => "add",
        Del => "del",
        Mod => "mod",
    }
);

wire_enum!(
    HostAllowedOperations {
        Provision => "provision",
        Evacuate => "evacuate",
        Shutdown => "shutdown",
        Reboot => "reboot",
        PowerOn => "power_on",
        VmStart => "vm_start",
        VmResume => "vm_resume",
        VmMigrate => "vm_migrate",
    }
);

wire_enum!(
    IpConfigurationMode {
        None => "None",
        Dhcp => "DHCP",
        Static => "Static",
    }
);

wire_enum!(
    Ipv6ConfigurationMode {
        None => "None",
        Dhcp => "DHCP",
        Static => "Static",
        Autoconf => "Autoconf",
    }
);

wire_enum!(
    NetworkDefaultLockingMode {
        Unlocked => "unlocked",
        Disabled => "disabled",
    }
);

wire_enum!(
    NetworkOperations {
        Attaching => "attaching",
    }
);

wire_enum!(
    OnBoot {
        Reset => "reset",
        Persist => "persist",
    }
);

wire_enum!(
    OnCrashBehaviour {
        Destroy => "destroy",
        CoredumpAndDestroy => "coredump_and_destroy",
        Restart => "restart",
        CoredumpAndRestart => "coredump_and_restart",
        Preserve => "preserve",
        RenameRestart => "rename_restart",
    }
);

wire_enum!(
    OnNormalExit {
        Destroy => "destroy",
        Restart => "restart",
    }
);

wire_enum!(
    PrimaryAddressType {
        Ipv4 => "IPv4",
        Ipv6 => "IPv6",
    }
);

wire_enum!(
    StorageOperations {
        Scan => "scan",
        Destroy => "destroy",
        Forget => "forget",
        Plug => "plug",
        Unplug => "unplug",
        Update => "update",
        VdiCreate => "vdi_create",
        VdiIntroduce => "vdi_introduce",
        VdiDestroy => "vdi_destroy",
        VdiResize => "vdi_resize",
        VdiClone => "vdi_clone",
        VdiSnapshot => "vdi_snapshot",
        PbdCreate => "pbd_create",
        PbdDestroy => "pbd_destroy",
    }
);

wire_enum!(
    TaskAllowedOperations {
        Cancel => "cancel",
    }
);

wire_enum!(
    TaskStatusType {
        Pending => "pending",
        Success => "success",
        Failure => "failure",
        Cancelling => "cancelling",
        Cancelled => "cancelled",
    }
);

impl TaskStatusType {
    /// Whether the task will never change status again.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskStatusType::Success | TaskStatusType::Failure | TaskStatusType::Cancelled
        )
    }
}

wire_enum!(
    VbdMode {
        Ro => "RO",
        Rw => "RW",
    }
);

wire_enum!(
    VbdOperations {
        Attach => "attach",
        Eject => "eject",
        Insert => "insert",
        Plug => "plug",
        Unplug => "unplug",
        UnplugForce => "unplug_force",
        Pause => "pause",
        Unpause => "unpause",
    }
);

wire_enum!(
    VbdType {
        Cd => "CD",
        Disk => "Disk",
    }
);

wire_enum!(
    VdiOperations {
        Scan => "scan",
        Clone => "clone",
        Copy => "copy",
        Resize => "resize",
        ResizeOnline => "resize_online",
        Snapshot => "snapshot",
        Destroy => "destroy",
        Forget => "forget",
        Update => "update",
        ForceUnlock => "force_unlock",
        GenerateConfig => "generate_config",
        Blocked => "blocked",
    }
);

wire_enum!(
    VdiType {
        System => "system",
        User => "user",
        Ephemeral => "ephemeral",
        Suspend => "suspend",
        Crashdump => "crashdump",
        HaStatefile => "ha_statefile",
        Metadata => "metadata",
        RedoLog => "redo_log",
    }
);

wire_enum!(
    VifLockingMode {
        NetworkDefault => "network_default",
        Locked => "locked",
        Unlocked => "unlocked",
        Disabled => "disabled",
    }
);

wire_enum!(
    VifOperations {
        Attach => "attach",
        Plug => "plug",
        Unplug => "unplug",
    }
);

wire_enum!(
    VmApplianceOperation {
        Start => "start",
        CleanShutdown => "clean_shutdown",
        HardShutdown => "hard_shutdown",
        Shutdown => "shutdown",
    }
);

wire_enum!(
    VmOperations {
        Snapshot => "snapshot",
        Clone => "clone",
        Copy => "copy",
        CreateTemplate => "create_template",
        Revert => "revert",
        Checkpoint => "checkpoint",
        SnapshotWithQuiesce => "snapshot_with_quiesce",
        Provision => "provision",
        Start => "start",
        StartOn => "start_on",
        Pause => "pause",
        Unpause => "unpause",
        CleanShutdown => "clean_shutdown",
        CleanReboot => "clean_reboot",
        HardShutdown => "hard_shutdown",
        PowerStateReset => "power_state_reset",
        HardReboot => "hard_reboot",
        Suspend => "suspend",
        Csvm => "csvm",
        Resume => "resume",
        ResumeOn => "resume_on",
        PoolMigrate => "pool_migrate",
        MigrateSend => "migrate_send",
        GetBootRecord => "get_boot_record",
        SendSysrq => "send_sysrq",
        SendTrigger => "send_trigger",
        QueryServices => "query_services",
        ChangingMemoryLive => "changing_memory_live",
        AwaitingMemoryLive => "awaiting_memory_live",
        ChangingDynamicRange => "changing_dynamic_range",
        ChangingStaticRange => "changing_static_range",
        ChangingMemoryLimits => "changing_memory_limits",
        ChangingShadowMemory => "changing_shadow_memory",
        ChangingShadowMemoryLive => "changing_shadow_memory_live",
        ChangingVcpus => "changing_VCPUs",
        ChangingVcpusLive => "changing_VCPUs_live",
        Assert => "assert_operation_valid",
        DataSourceOp => "data_source_op",
        UpdateAllowedOperations => "update_allowed_operations",
        MakeIntoTemplate => "make_into_template",
        ImportVdi => "import_vdi",
        Import => "import",
        Export => "export",
        MetadataExport => "metadata_export",
        Reverting => "reverting",
        Destroy => "destroy",
    }
);

wire_enum!(
    VmPowerState {
        Halted => "Halted",
        Paused => "Paused",
        Running => "Running",
        Suspended => "Suspended",
    }
);

wire_enum!(
    VmppArchiveFrequency {
        Never => "never",
        AlwaysAfterBackup => "always_after_backup",
        Daily => "daily",
        Weekly => "weekly",
    }
);

wire_enum!(
    VmppArchiveTargetType {
        None => "none",
        Cifs => "cifs",
        Nfs => "nfs",
    }
);

wire_enum!(
    VmppBackupFrequency {
        Hourly => "hourly",
        Daily => "daily",
        Weekly => "weekly",
    }
);

wire_enum!(
    VmppBackupType {
        Snapshot => "snapshot",
        Checkpoint => "checkpoint",
    }
);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use value::{Value, value};

    use super::*;
    use crate::decode::Decode;

    #[test]
    fn tags_ignore_case() {
        assert_eq!(VmPowerState::decode(&value!("Running")).unwrap(), VmPowerState::Running);
        assert_eq!(VmPowerState::decode(&value!("RUNNING")).unwrap(), VmPowerState::Running);
        assert_eq!(VmPowerState::decode(&value!("running")).unwrap(), VmPowerState::Running);
        assert_eq!(BondMode::decode(&value!("active-backup")).unwrap(), BondMode::ActiveBackup);
    }

    #[test]
    fn unknown_tags_never_fail() {
        assert_eq!(
            VmPowerState::decode(&value!("Hibernating")).unwrap(),
            VmPowerState::Unrecognized
        );
        assert_eq!(VdiType::decode(&value!("")).unwrap(), VdiType::Unrecognized);
        assert_eq!(VdiType::decode(&value!(7)).unwrap(), VdiType::Unrecognized);
        assert_eq!(Option::<VdiType>::decode(&Value::Null).unwrap(), None);
    }

    #[test]
    fn display_round_trips() {
        for member in VmOperations::ALL {
            let tag = member.to_string();
            assert_eq!(VmOperations::decode(&Value::from(*member)).unwrap(), *member);
            assert_eq!(VmOperations::from_tag(&tag.to_uppercase()), *member);
        }

        for member in TaskStatusType::ALL {
            assert_eq!(TaskStatusType::from_tag(member.as_str()), *member);
        }
    }

    #[test]
    fn default_is_unrecognized() {
        assert_eq!(OnBoot::default(), OnBoot::Unrecognized);
        assert_eq!(OnBoot::Unrecognized.to_string(), "UNRECOGNIZED");
    }

    #[test]
    fn terminal_status() {
        assert!(TaskStatusType::Success.is_terminal());
        assert!(TaskStatusType::Cancelled.is_terminal());
        assert!(!TaskStatusType::Cancelling.is_terminal());
        assert!(!TaskStatusType::Pending.is_terminal());
        assert!(!TaskStatusType::Unrecognized.is_terminal());
    }

    #[test]
    fn serialize_as_tag() {
        assert_eq!(
            serde_json::to_string(&VifLockingMode::NetworkDefault).unwrap(),
            r#""network_default""#
        );
    }
}
