//! The object classes of the pool API and their record shapes.
//!
//! Each row maps a Rust field onto the member name the server uses in
//! `get_record` results and event snapshots.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use indexmap::IndexSet;

use super::enums::*;
use crate::reference::Ref;

type Map = HashMap<String, String>;
type Timestamp = DateTime<Utc>;

classes! {
    /// A connection to the pool, created by `session.login_with_password`.
    Session => "session", SessionRecord {
        uuid: String = "uuid",
        this_host: Ref<Host> = "this_host",
        this_user: Ref<User> = "this_user",
        last_active: Timestamp = "last_active",
        pool: bool = "pool",
        other_config: Map = "other_config",
        is_local_superuser: bool = "is_local_superuser",
        subject: Ref<Subject> = "subject",
        validation_time: Timestamp = "validation_time",
        auth_user_sid: String = "auth_user_sid",
        auth_user_name: String = "auth_user_name",
        rbac_permissions: IndexSet<String> = "rbac_permissions",
        tasks: IndexSet<Ref<Task>> = "tasks",
        parent: Ref<Session> = "parent",
    }

    /// A user or group known to the external directory service.
    Subject => "subject", SubjectRecord {
        uuid: String = "uuid",
        subject_identifier: String = "subject_identifier",
        other_config: Map = "other_config",
        roles: IndexSet<Ref<Role>> = "roles",
    }

    Role => "role", RoleRecord {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        subroles: IndexSet<Ref<Role>> = "subroles",
    }

    /// A long running operation, see [`crate::task`].
    Task => "task", TaskRecord {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        allowed_operations: IndexSet<TaskAllowedOperations> = "allowed_operations",
        current_operations: HashMap<String, TaskAllowedOperations> = "current_operations",
        created: Timestamp = "created",
        finished: Timestamp = "finished",
        status: TaskStatusType = "status",
        resident_on: Ref<Host> = "resident_on",
        progress: f64 = "progress",
        typ: String = "type",
        /// The raw result document, only meaningful once `status` is success.
        result: String = "result",
        error_info: Vec<String> = "error_info",
        other_config: Map = "other_config",
        subtask_of: Ref<Task> = "subtask_of",
        subtasks: IndexSet<Ref<Task>> = "subtasks",
    }

    Pool => "pool", PoolRecord {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        master: Ref<Host> = "master",
        default_sr: Ref<Sr> = "default_SR",
        suspend_image_sr: Ref<Sr> = "suspend_image_SR",
        crash_dump_sr: Ref<Sr> = "crash_dump_SR",
        other_config: Map = "other_config",
        ha_enabled: bool = "ha_enabled",
        ha_configuration: Map = "ha_configuration",
        ha_statefiles: IndexSet<String> = "ha_statefiles",
        ha_host_failures_to_tolerate: i64 = "ha_host_failures_to_tolerate",
        ha_plan_exists_for: i64 = "ha_plan_exists_for",
        ha_allow_overcommit: bool = "ha_allow_overcommit",
        ha_overcommitted: bool = "ha_overcommitted",
        blobs: HashMap<String, Ref<Blob>> = "blobs",
        tags: IndexSet<String> = "tags",
        gui_config: Map = "gui_config",
        wlb_url: String = "wlb_url",
        wlb_username: String = "wlb_username",
        wlb_enabled: bool = "wlb_enabled",
        wlb_verify_cert: bool = "wlb_verify_cert",
        redo_log_enabled: bool = "redo_log_enabled",
        redo_log_vdi: Ref<Vdi> = "redo_log_vdi",
        vswitch_controller: String = "vswitch_controller",
        restrictions: Map = "restrictions",
        metadata_vdis: IndexSet<Ref<Vdi>> = "metadata_VDIs",
    }

    PoolPatch => "pool_patch", PoolPatchRecord {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        version: String = "version",
        size: i64 = "size",
        pool_applied: bool = "pool_applied",
        host_patches: IndexSet<Ref<HostPatch>> = "host_patches",
        after_apply_guidance: IndexSet<AfterApplyGuidance> = "after_apply_guidance",
        other_config: Map = "other_config",
    }

    /// A virtual machine, template or snapshot.
    Vm => "VM", VmRecord {
        uuid: String = "uuid",
        allowed_operations: IndexSet<VmOperations> = "allowed_operations",
        current_operations: HashMap<String, VmOperations> = "current_operations",
        power_state: VmPowerState = "power_state",
        name_label: String = "name_label",
        name_description: String = "name_description",
        user_version: i64 = "user_version",
        is_a_template: bool = "is_a_template",
        suspend_vdi: Ref<Vdi> = "suspend_VDI",
        resident_on: Ref<Host> = "resident_on",
        affinity: Ref<Host> = "affinity",
        memory_overhead: i64 = "memory_overhead",
        memory_target: i64 = "memory_target",
        memory_static_max: i64 = "memory_static_max",
        memory_dynamic_max: i64 = "memory_dynamic_max",
        memory_dynamic_min: i64 = "memory_dynamic_min",
        memory_static_min: i64 = "memory_static_min",
        vcpus_params: Map = "VCPUs_params",
        vcpus_max: i64 = "VCPUs_max",
        vcpus_at_startup: i64 = "VCPUs_at_startup",
        actions_after_shutdown: OnNormalExit = "actions_after_shutdown",
        actions_after_reboot: OnNormalExit = "actions_after_reboot",
        actions_after_crash: OnCrashBehaviour = "actions_after_crash",
        consoles: IndexSet<Ref<Console>> = "consoles",
        vifs: IndexSet<Ref<Vif>> = "VIFs",
        vbds: IndexSet<Ref<Vbd>> = "VBDs",
        crash_dumps: IndexSet<Ref<Crashdump>> = "crash_dumps",
        vtpms: IndexSet<Ref<Vtpm>> = "VTPMs",
        pv_bootloader: String = "PV_bootloader",
        pv_kernel: String = "PV_kernel",
        pv_ramdisk: String = "PV_ramdisk",
        pv_args: String = "PV_args",
        pv_bootloader_args: String = "PV_bootloader_args",
        pv_legacy_args: String = "PV_legacy_args",
        hvm_boot_policy: String = "HVM_boot_policy",
        hvm_boot_params: Map = "HVM_boot_params",
        hvm_shadow_multiplier: f64 = "HVM_shadow_multiplier",
        platform: Map = "platform",
        pci_bus: String = "PCI_bus",
        other_config: Map = "other_config",
        domid: i64 = "domid",
        domarch: String = "domarch",
        last_boot_cpu_flags: Map = "last_boot_CPU_flags",
        is_control_domain: bool = "is_control_domain",
        metrics: Ref<VmMetrics> = "metrics",
        guest_metrics: Ref<VmGuestMetrics> = "guest_metrics",
        last_booted_record: String = "last_booted_record",
        recommendations: String = "recommendations",
        xenstore_data: Map = "xenstore_data",
        ha_always_run: bool = "ha_always_run",
        ha_restart_priority: String = "ha_restart_priority",
        is_a_snapshot: bool = "is_a_snapshot",
        snapshot_of: Ref<Vm> = "snapshot_of",
        snapshots: IndexSet<Ref<Vm>> = "snapshots",
        snapshot_time: Timestamp = "snapshot_time",
        transportable_snapshot_id: String = "transportable_snapshot_id",
        blobs: HashMap<String, Ref<Blob>> = "blobs",
        tags: IndexSet<String> = "tags",
        blocked_operations: HashMap<VmOperations, String> = "blocked_operations",
        snapshot_info: Map = "snapshot_info",
        snapshot_metadata: String = "snapshot_metadata",
        parent: Ref<Vm> = "parent",
        children: IndexSet<Ref<Vm>> = "children",
        bios_strings: Map = "bios_strings",
        protection_policy: Ref<Vmpp> = "protection_policy",
        is_snapshot_from_vmpp: bool = "is_snapshot_from_vmpp",
        appliance: Ref<VmAppliance> = "appliance",
        start_delay: i64 = "start_delay",
        shutdown_delay: i64 = "shutdown_delay",
        order: i64 = "order",
        vgpus: IndexSet<Ref<Vgpu>> = "VGPUs",
        attached_pcis: IndexSet<Ref<Pci>> = "attached_PCIs",
        suspend_sr: Ref<Sr> = "suspend_SR",
        version: i64 = "version",
    }

    VmMetrics => "VM_metrics", VmMetricsRecord {
        uuid: String = "uuid",
        memory_actual: i64 = "memory_actual",
        vcpus_number: i64 = "VCPUs_number",
        vcpus_utilisation: HashMap<i64, f64> = "VCPUs_utilisation",
        vcpus_cpu: HashMap<i64, i64> = "VCPUs_CPU",
        vcpus_params: Map = "VCPUs_params",
        vcpus_flags: HashMap<i64, IndexSet<String>> = "VCPUs_flags",
        state: IndexSet<String> = "state",
        start_time: Timestamp = "start_time",
        install_time: Timestamp = "install_time",
        last_updated: Timestamp = "last_updated",
        other_config: Map = "other_config",
    }

    /// What the guest agent reports about the running VM.
    VmGuestMetrics => "VM_guest_metrics", VmGuestMetricsRecord {
        uuid: String = "uuid",
        os_version: Map = "os_version",
        pv_drivers_version: Map = "PV_drivers_version",
        pv_drivers_up_to_date: bool = "PV_drivers_up_to_date",
        memory: Map = "memory",
        disks: Map = "disks",
        networks: Map = "networks",
        other: Map = "other",
        last_updated: Timestamp = "last_updated",
        other_config: Map = "other_config",
        live: bool = "live",
    }

    /// A VM protection policy.
    Vmpp => "VMPP", VmppRecord {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        is_policy_enabled: bool = "is_policy_enabled",
        backup_type: VmppBackupType = "backup_type",
        backup_retention_value: i64 = "backup_retention_value",
        backup_frequency: VmppBackupFrequency = "backup_frequency",
        backup_schedule: Map = "backup_schedule",
        is_backup_running: bool = "is_backup_running",
        backup_last_run_time: Timestamp = "backup_last_run_time",
        archive_target_type: VmppArchiveTargetType = "archive_target_type",
        archive_target_config: Map = "archive_target_config",
        archive_frequency: VmppArchiveFrequency = "archive_frequency",
        archive_schedule: Map = "archive_schedule",
        is_archive_running: bool = "is_archive_running",
        archive_last_run_time: Timestamp = "archive_last_run_time",
        vms: IndexSet<Ref<Vm>> = "VMs",
        is_alarm_enabled: bool = "is_alarm_enabled",
        alarm_config: Map = "alarm_config",
        recent_alerts: IndexSet<String> = "recent_alerts",
    }

    VmAppliance => "VM_appliance", VmApplianceRecord {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        allowed_operations: IndexSet<VmApplianceOperation> = "allowed_operations",
        current_operations: HashMap<String, VmApplianceOperation> = "current_operations",
        vms: IndexSet<Ref<Vm>> = "VMs",
    }

    DrTask => "DR_task", DrTaskRecord {
        uuid: String = "uuid",
        introduced_srs: IndexSet<Ref<Sr>> = "introduced_SRs",
    }

    /// A physical host.
    Host => "host", HostRecord {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        memory_overhead: i64 = "memory_overhead",
        allowed_operations: IndexSet<HostAllowedOperations> = "allowed_operations",
        current_operations: HashMap<String, HostAllowedOperations> = "current_operations",
        api_version_major: i64 = "API_version_major",
        api_version_minor: i64 = "API_version_minor",
        api_version_vendor: String = "API_version_vendor",
        api_version_vendor_implementation: Map = "API_version_vendor_implementation",
        enabled: bool = "enabled",
        software_version: Map = "software_version",
        other_config: Map = "other_config",
        capabilities: IndexSet<String> = "capabilities",
        cpu_configuration: Map = "cpu_configuration",
        sched_policy: String = "sched_policy",
        supported_bootloaders: IndexSet<String> = "supported_bootloaders",
        resident_vms: IndexSet<Ref<Vm>> = "resident_VMs",
        logging: Map = "logging",
        pifs: IndexSet<Ref<Pif>> = "PIFs",
        suspend_image_sr: Ref<Sr> = "suspend_image_sr",
        crash_dump_sr: Ref<Sr> = "crash_dump_sr",
        crashdumps: IndexSet<Ref<HostCrashdump>> = "crashdumps",
        patches: IndexSet<Ref<HostPatch>> = "patches",
        pbds: IndexSet<Ref<Pbd>> = "PBDs",
        host_cpus: IndexSet<Ref<HostCpu>> = "host_CPUs",
        cpu_info: Map = "cpu_info",
        hostname: String = "hostname",
        address: String = "address",
        metrics: Ref<HostMetrics> = "metrics",
        license_params: Map = "license_params",
        ha_statefiles: IndexSet<String> = "ha_statefiles",
        ha_network_peers: IndexSet<String> = "ha_network_peers",
        blobs: HashMap<String, Ref<Blob>> = "blobs",
        tags: IndexSet<String> = "tags",
        external_auth_type: String = "external_auth_type",
        external_auth_service_name: String = "external_auth_service_name",
        external_auth_configuration: Map = "external_auth_configuration",
        edition: String = "edition",
        license_server: Map = "license_server",
        bios_strings: Map = "bios_strings",
        power_on_mode: String = "power_on_mode",
        power_on_config: Map = "power_on_config",
        local_cache_sr: Ref<Sr> = "local_cache_sr",
        chipset_info: Map = "chipset_info",
        pcis: IndexSet<Ref<Pci>> = "PCIs",
        pgpus: IndexSet<Ref<Pgpu>> = "PGPUs",
    }

    HostCrashdump => "host_crashdump", HostCrashdumpRecord {
        uuid: String = "uuid",
        host: Ref<Host> = "host",
        timestamp: Timestamp = "timestamp",
        size: i64 = "size",
        other_config: Map = "other_config",
    }

    HostPatch => "host_patch", HostPatchRecord {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        version: String = "version",
        host: Ref<Host> = "host",
        applied: bool = "applied",
        timestamp_applied: Timestamp = "timestamp_applied",
        size: i64 = "size",
        pool_patch: Ref<PoolPatch> = "pool_patch",
        other_config: Map = "other_config",
    }

    HostMetrics => "host_metrics", HostMetricsRecord {
        uuid: String = "uuid",
        memory_total: i64 = "memory_total",
        memory_free: i64 = "memory_free",
        live: bool = "live",
        last_updated: Timestamp = "last_updated",
        other_config: Map = "other_config",
    }

    HostCpu => "host_cpu", HostCpuRecord {
        uuid: String = "uuid",
        host: Ref<Host> = "host",
        number: i64 = "number",
        vendor: String = "vendor",
        speed: i64 = "speed",
        modelname: String = "modelname",
        family: i64 = "family",
        model: i64 = "model",
        stepping: String = "stepping",
        flags: String = "flags",
        features: String = "features",
        utilisation: f64 = "utilisation",
        other_config: Map = "other_config",
    }

    Network => "network", NetworkRecord {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        allowed_operations: IndexSet<NetworkOperations> = "allowed_operations",
        current_operations: HashMap<String, NetworkOperations> = "current_operations",
        vifs: IndexSet<Ref<Vif>> = "VIFs",
        pifs: IndexSet<Ref<Pif>> = "PIFs",
        mtu: i64 = "MTU",
        other_config: Map = "other_config",
        bridge: String = "bridge",
        blobs: HashMap<String, Ref<Blob>> = "blobs",
        tags: IndexSet<String> = "tags",
        default_locking_mode: NetworkDefaultLockingMode = "default_locking_mode",
    }

    /// A virtual network interface.
    Vif => "VIF", VifRecord {
        uuid: String = "uuid",
        allowed_operations: IndexSet<VifOperations> = "allowed_operations",
        current_operations: HashMap<String, VifOperations> = "current_operations",
        device: String = "device",
        network: Ref<Network> = "network",
        vm: Ref<Vm> = "VM",
        mac: String = "MAC",
        mtu: i64 = "MTU",
        other_config: Map = "other_config",
        currently_attached: bool = "currently_attached",
        status_code: i64 = "status_code",
        status_detail: String = "status_detail",
        runtime_properties: Map = "runtime_properties",
        qos_algorithm_type: String = "qos_algorithm_type",
        qos_algorithm_params: Map = "qos_algorithm_params",
        qos_supported_algorithms: IndexSet<String> = "qos_supported_algorithms",
        metrics: Ref<VifMetrics> = "metrics",
        mac_autogenerated: bool = "MAC_autogenerated",
        locking_mode: VifLockingMode = "locking_mode",
        ipv4_allowed: IndexSet<String> = "ipv4_allowed",
        ipv6_allowed: IndexSet<String> = "ipv6_allowed",
    }

    VifMetrics => "VIF_metrics", VifMetricsRecord {
        uuid: String = "uuid",
        io_read_kbs: f64 = "io_read_kbs",
        io_write_kbs: f64 = "io_write_kbs",
        last_updated: Timestamp = "last_updated",
        other_config: Map = "other_config",
    }

    /// A physical network interface.
    Pif => "PIF", PifRecord {
        uuid: String = "uuid",
        device: String = "device",
        network: Ref<Network> = "network",
        host: Ref<Host> = "host",
        mac: String = "MAC",
        mtu: i64 = "MTU",
        vlan: i64 = "VLAN",
        metrics: Ref<PifMetrics> = "metrics",
        physical: bool = "physical",
        currently_attached: bool = "currently_attached",
        ip_configuration_mode: IpConfigurationMode = "ip_configuration_mode",
        ip: String = "IP",
        netmask: String = "netmask",
        gateway: String = "gateway",
        dns: String = "DNS",
        bond_slave_of: Ref<Bond> = "bond_slave_of",
        bond_master_of: IndexSet<Ref<Bond>> = "bond_master_of",
        vlan_master_of: Ref<Vlan> = "VLAN_master_of",
        vlan_slave_of: IndexSet<Ref<Vlan>> = "VLAN_slave_of",
        management: bool = "management",
        other_config: Map = "other_config",
        disallow_unplug: bool = "disallow_unplug",
        tunnel_access_pif_of: IndexSet<Ref<Tunnel>> = "tunnel_access_PIF_of",
        tunnel_transport_pif_of: IndexSet<Ref<Tunnel>> = "tunnel_transport_PIF_of",
        ipv6_configuration_mode: Ipv6ConfigurationMode = "ipv6_configuration_mode",
        ipv6: IndexSet<String> = "IPv6",
        ipv6_gateway: String = "ipv6_gateway",
        primary_address_type: PrimaryAddressType = "primary_address_type",
    }

    PifMetrics => "PIF_metrics", PifMetricsRecord {
        uuid: String = "uuid",
        io_read_kbs: f64 = "io_read_kbs",
        io_write_kbs: f64 = "io_write_kbs",
        carrier: bool = "carrier",
        vendor_id: String = "vendor_id",
        vendor_name: String = "vendor_name",
        device_id: String = "device_id",
        device_name: String = "device_name",
        speed: i64 = "speed",
        duplex: bool = "duplex",
        pci_bus_path: String = "pci_bus_path",
        last_updated: Timestamp = "last_updated",
        other_config: Map = "other_config",
    }

    Bond => "Bond", BondRecord {
        uuid: String = "uuid",
        master: Ref<Pif> = "master",
        slaves: IndexSet<Ref<Pif>> = "slaves",
        other_config: Map = "other_config",
        primary_slave: Ref<Pif> = "primary_slave",
        mode: BondMode = "mode",
        properties: Map = "properties",
        links_up: i64 = "links_up",
    }

    Vlan => "VLAN", VlanRecord {
        uuid: String = "uuid",
        tagged_pif: Ref<Pif> = "tagged_PIF",
        untagged_pif: Ref<Pif> = "untagged_PIF",
        tag: i64 = "tag",
        other_config: Map = "other_config",
    }

    /// A storage manager plugin.
    Sm => "SM", SmRecord {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        typ: String = "type",
        vendor: String = "vendor",
        copyright: String = "copyright",
        version: String = "version",
        required_api_version: String = "required_api_version",
        configuration: Map = "configuration",
        capabilities: IndexSet<String> = "capabilities",
        features: HashMap<String, i64> = "features",
        other_config: Map = "other_config",
        driver_filename: String = "driver_filename",
    }

    /// A storage repository.
    Sr => "SR", SrRecord {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        allowed_operations: IndexSet<StorageOperations> = "allowed_operations",
        current_operations: HashMap<String, StorageOperations> = "current_operations",
        vdis: IndexSet<Ref<Vdi>> = "VDIs",
        pbds: IndexSet<Ref<Pbd>> = "PBDs",
        virtual_allocation: i64 = "virtual_allocation",
        physical_utilisation: i64 = "physical_utilisation",
        physical_size: i64 = "physical_size",
        typ: String = "type",
        content_type: String = "content_type",
        shared: bool = "shared",
        other_config: Map = "other_config",
        tags: IndexSet<String> = "tags",
        sm_config: Map = "sm_config",
        blobs: HashMap<String, Ref<Blob>> = "blobs",
        local_cache_enabled: bool = "local_cache_enabled",
        introduced_by: Ref<DrTask> = "introduced_by",
    }

    /// A virtual disk image.
    Vdi => "VDI", VdiRecord {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        allowed_operations: IndexSet<VdiOperations> = "allowed_operations",
        current_operations: HashMap<String, VdiOperations> = "current_operations",
        sr: Ref<Sr> = "SR",
        vbds: IndexSet<Ref<Vbd>> = "VBDs",
        crash_dumps: IndexSet<Ref<Crashdump>> = "crash_dumps",
        virtual_size: i64 = "virtual_size",
        physical_utilisation: i64 = "physical_utilisation",
        typ: VdiType = "type",
        sharable: bool = "sharable",
        read_only: bool = "read_only",
        other_config: Map = "other_config",
        storage_lock: bool = "storage_lock",
        location: String = "location",
        managed: bool = "managed",
        missing: bool = "missing",
        parent: Ref<Vdi> = "parent",
        xenstore_data: Map = "xenstore_data",
        sm_config: Map = "sm_config",
        is_a_snapshot: bool = "is_a_snapshot",
        snapshot_of: Ref<Vdi> = "snapshot_of",
        snapshots: IndexSet<Ref<Vdi>> = "snapshots",
        snapshot_time: Timestamp = "snapshot_time",
        tags: IndexSet<String> = "tags",
        allow_caching: bool = "allow_caching",
        on_boot: OnBoot = "on_boot",
        metadata_of_pool: Ref<Pool> = "metadata_of_pool",
        metadata_latest: bool = "metadata_latest",
    }

    /// A virtual block device, attaching a VDI to a VM.
    Vbd => "VBD", VbdRecord {
        uuid: String = "uuid",
        allowed_operations: IndexSet<VbdOperations> = "allowed_operations",
        current_operations: HashMap<String, VbdOperations> = "current_operations",
        vm: Ref<Vm> = "VM",
        vdi: Ref<Vdi> = "VDI",
        device: String = "device",
        userdevice: String = "userdevice",
        bootable: bool = "bootable",
        mode: VbdMode = "mode",
        typ: VbdType = "type",
        unpluggable: bool = "unpluggable",
        storage_lock: bool = "storage_lock",
        empty: bool = "empty",
        other_config: Map = "other_config",
        currently_attached: bool = "currently_attached",
        status_code: i64 = "status_code",
        status_detail: String = "status_detail",
        runtime_properties: Map = "runtime_properties",
        qos_algorithm_type: String = "qos_algorithm_type",
        qos_algorithm_params: Map = "qos_algorithm_params",
        qos_supported_algorithms: IndexSet<String> = "qos_supported_algorithms",
        metrics: Ref<VbdMetrics> = "metrics",
    }

    VbdMetrics => "VBD_metrics", VbdMetricsRecord {
        uuid: String = "uuid",
        io_read_kbs: f64 = "io_read_kbs",
        io_write_kbs: f64 = "io_write_kbs",
        last_updated: Timestamp = "last_updated",
        other_config: Map = "other_config",
    }

    /// The binding of an SR to a host.
    Pbd => "PBD", PbdRecord {
        uuid: String = "uuid",
        host: Ref<Host> = "host",
        sr: Ref<Sr> = "SR",
        device_config: Map = "device_config",
        currently_attached: bool = "currently_attached",
        other_config: Map = "other_config",
    }

    Crashdump => "crashdump", CrashdumpRecord {
        uuid: String = "uuid",
        vm: Ref<Vm> = "VM",
        vdi: Ref<Vdi> = "VDI",
        other_config: Map = "other_config",
    }

    Vtpm => "VTPM", VtpmRecord {
        uuid: String = "uuid",
        vm: Ref<Vm> = "VM",
        backend: Ref<Vm> = "backend",
    }

    Console => "console", ConsoleRecord {
        uuid: String = "uuid",
        protocol: ConsoleProtocol = "protocol",
        location: String = "location",
        vm: Ref<Vm> = "VM",
        other_config: Map = "other_config",
    }

    User => "user", UserRecord {
        uuid: String = "uuid",
        short_name: String = "short_name",
        fullname: String = "fullname",
        other_config: Map = "other_config",
    }

    Blob => "blob", BlobRecord {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        size: i64 = "size",
        public: bool = "public",
        last_updated: Timestamp = "last_updated",
        mime_type: String = "mime_type",
    }

    /// An alert raised by the pool.
    Message => "message", MessageRecord {
        uuid: String = "uuid",
        name: String = "name",
        priority: i64 = "priority",
        cls: Cls = "cls",
        obj_uuid: String = "obj_uuid",
        timestamp: Timestamp = "timestamp",
        body: String = "body",
    }

    Secret => "secret", SecretRecord {
        uuid: String = "uuid",
        value: String = "value",
        other_config: Map = "other_config",
    }

    Tunnel => "tunnel", TunnelRecord {
        uuid: String = "uuid",
        access_pif: Ref<Pif> = "access_PIF",
        transport_pif: Ref<Pif> = "transport_PIF",
        status: Map = "status",
        other_config: Map = "other_config",
    }

    Pci => "PCI", PciRecord {
        uuid: String = "uuid",
        class_name: String = "class_name",
        vendor_name: String = "vendor_name",
        device_name: String = "device_name",
        host: Ref<Host> = "host",
        pci_id: String = "pci_id",
        dependencies: IndexSet<Ref<Pci>> = "dependencies",
        other_config: Map = "other_config",
    }

    Pgpu => "PGPU", PgpuRecord {
        uuid: String = "uuid",
        pci: Ref<Pci> = "PCI",
        gpu_group: Ref<GpuGroup> = "GPU_group",
        host: Ref<Host> = "host",
        other_config: Map = "other_config",
    }

    GpuGroup => "GPU_group", GpuGroupRecord {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        pgpus: IndexSet<Ref<Pgpu>> = "PGPUs",
        vgpus: IndexSet<Ref<Vgpu>> = "VGPUs",
        gpu_types: IndexSet<String> = "GPU_types",
        other_config: Map = "other_config",
    }

    Vgpu => "VGPU", VgpuRecord {
        uuid: String = "uuid",
        vm: Ref<Vm> = "VM",
        gpu_group: Ref<GpuGroup> = "GPU_group",
        device: String = "device",
        currently_attached: bool = "currently_attached",
        other_config: Map = "other_config",
    }
}
