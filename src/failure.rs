//! Failure envelopes and the structured errors they carry.
//!
//! Every call answers with a struct holding `Status`. On success the
//! payload is under `Value`, on failure `ErrorDescription` holds the error
//! code followed by its parameters, all strings.

use std::fmt::{Display, Formatter};

use tracing::debug;
use value::Value;

use crate::error::Error;

macro_rules! api_errors {
    (
        $(
            $variant:ident = $code:literal { $($field:ident),* },
        )+
    ) => {
        /// A failure reported by the server.
        ///
        /// Parameters are bound to fields by position. Missing trailing
        /// parameters become empty strings and extra ones are dropped.
        #[derive(Clone, Debug, Eq, PartialEq)]
        pub enum ApiError {
            $(
                #[doc = concat!("`", $code, "`")]
                $variant { $($field: String),* },
            )+

            /// A code this client does not know, with the whole description.
            Unknown { description: Vec<String> },
        }

        impl ApiError {
            /// Every known error code.
            pub const CODES: &'static [&'static str] = &[$($code,)+];

            /// Builds the error from an `ErrorDescription`, code first.
            pub fn from_description(description: &[String]) -> Self {
                let Some((code, params)) = description.split_first() else {
                    return ApiError::Unknown { description: Vec::new() };
                };

                #[allow(unused_mut, unused_variables)]
                let mut params = params.iter().cloned();
                match code.as_str() {
                    $(
                        $code => ApiError::$variant {
                            $($field: params.next().unwrap_or_default(),)*
                        },
                    )+
                    _ => ApiError::Unknown {
                        description: description.to_vec(),
                    },
                }
            }

            /// Declared parameter names of `code`, in wire order.
            pub fn field_names(code: &str) -> Option<&'static [&'static str]> {
                match code {
                    $($code => Some(&[$(stringify!($field)),*]),)+
                    _ => None,
                }
            }

            pub fn code(&self) -> &str {
                match self {
                    $(ApiError::$variant { .. } => $code,)+
                    ApiError::Unknown { description } => {
                        description.first().map(String::as_str).unwrap_or_default()
                    }
                }
            }

            /// Named parameters in wire order. Parameters of an unknown
            /// code are named by their position.
            pub fn fields(&self) -> Vec<(String, &str)> {
                match self {
                    $(
                        ApiError::$variant { $($field),* } => {
                            vec![$((stringify!($field).to_string(), $field.as_str())),*]
                        }
                    )+
                    ApiError::Unknown { description } => description
                        .iter()
                        .skip(1)
                        .enumerate()
                        .map(|(index, param)| (index.to_string(), param.as_str()))
                        .collect(),
                }
            }

            pub fn field_count(&self) -> usize {
                match self {
                    ApiError::Unknown { description } => description.len().saturating_sub(1),
                    known => Self::field_names(known.code()).map_or(0, <[_]>::len),
                }
            }
        }
    };
}

api_errors! {
    ActivationWhileNotFree = "ACTIVATION_WHILE_NOT_FREE" {},
    AddressViolatesLockingConstraint = "ADDRESS_VIOLATES_LOCKING_CONSTRAINT" { address },
    AuthAlreadyEnabled = "AUTH_ALREADY_ENABLED" { current_auth_type, current_service_name },
    AuthDisableFailed = "AUTH_DISABLE_FAILED" { message },
    AuthDisableFailedPermissionDenied = "AUTH_DISABLE_FAILED_PERMISSION_DENIED" { message },
    AuthDisableFailedWrongCredentials = "AUTH_DISABLE_FAILED_WRONG_CREDENTIALS" { message },
    AuthEnableFailed = "AUTH_ENABLE_FAILED" { message },
    AuthEnableFailedDomainLookupFailed = "AUTH_ENABLE_FAILED_DOMAIN_LOOKUP_FAILED" { message },
    AuthEnableFailedInvalidOu = "AUTH_ENABLE_FAILED_INVALID_OU" { message },
    AuthEnableFailedPermissionDenied = "AUTH_ENABLE_FAILED_PERMISSION_DENIED" { message },
    AuthEnableFailedUnavailable = "AUTH_ENABLE_FAILED_UNAVAILABLE" { message },
    AuthEnableFailedWrongCredentials = "AUTH_ENABLE_FAILED_WRONG_CREDENTIALS" { message },
    AuthIsDisabled = "AUTH_IS_DISABLED" {},
    AuthServiceError = "AUTH_SERVICE_ERROR" { message },
    AuthUnknownType = "AUTH_UNKNOWN_TYPE" { typ },
    BackupScriptFailed = "BACKUP_SCRIPT_FAILED" { log },
    BootloaderFailed = "BOOTLOADER_FAILED" { vm, msg },
    BridgeNameExists = "BRIDGE_NAME_EXISTS" { bridge },
    BridgeNotAvailable = "BRIDGE_NOT_AVAILABLE" { bridge },
    CannotAddTunnelToBondSlave = "CANNOT_ADD_TUNNEL_TO_BOND_SLAVE" { pif },
    CannotAddVlanToBondSlave = "CANNOT_ADD_VLAN_TO_BOND_SLAVE" { pif },
    CannotChangePifProperties = "CANNOT_CHANGE_PIF_PROPERTIES" { pif },
    CannotContactHost = "CANNOT_CONTACT_HOST" { host },
    CannotCreateStateFile = "CANNOT_CREATE_STATE_FILE" {},
    CannotDestroyDisasterRecoveryTask = "CANNOT_DESTROY_DISASTER_RECOVERY_TASK" { reason },
    CannotDestroySystemNetwork = "CANNOT_DESTROY_SYSTEM_NETWORK" { network },
    CannotEnableRedoLog = "CANNOT_ENABLE_REDO_LOG" { reason },
    CannotEvacuateHost = "CANNOT_EVACUATE_HOST" { errors },
    CannotFetchPatch = "CANNOT_FETCH_PATCH" { uuid },
    CannotFindOemBackupPartition = "CANNOT_FIND_OEM_BACKUP_PARTITION" {},
    CannotFindPatch = "CANNOT_FIND_PATCH" {},
    CannotFindStatePartition = "CANNOT_FIND_STATE_PARTITION" {},
    CannotPlugBondSlave = "CANNOT_PLUG_BOND_SLAVE" { pif },
    CannotPlugVif = "CANNOT_PLUG_VIF" { vif },
    CannotResetControlDomain = "CANNOT_RESET_CONTROL_DOMAIN" { vm },
    CertificateAlreadyExists = "CERTIFICATE_ALREADY_EXISTS" { name },
    CertificateCorrupt = "CERTIFICATE_CORRUPT" { name },
    CertificateDoesNotExist = "CERTIFICATE_DOES_NOT_EXIST" { name },
    CertificateLibraryCorrupt = "CERTIFICATE_LIBRARY_CORRUPT" {},
    CertificateNameInvalid = "CERTIFICATE_NAME_INVALID" { name },
    ChangePasswordRejected = "CHANGE_PASSWORD_REJECTED" { msg },
    CouldNotFindNetworkInterfaceWithSpecifiedDeviceNameAndMacAddress = "COULD_NOT_FIND_NETWORK_INTERFACE_WITH_SPECIFIED_DEVICE_NAME_AND_MAC_ADDRESS" { device, mac },
    CouldNotImportDatabase = "COULD_NOT_IMPORT_DATABASE" { reason },
    CpuFeatureMaskingNotSupported = "CPU_FEATURE_MASKING_NOT_SUPPORTED" { details },
    CrlAlreadyExists = "CRL_ALREADY_EXISTS" { name },
    CrlCorrupt = "CRL_CORRUPT" { name },
    CrlDoesNotExist = "CRL_DOES_NOT_EXIST" { name },
    CrlNameInvalid = "CRL_NAME_INVALID" { name },
    DbUniquenessConstraintViolation = "DB_UNIQUENESS_CONSTRAINT_VIOLATION" { table, field, value },
    DefaultSrNotFound = "DEFAULT_SR_NOT_FOUND" { sr },
    DeviceAlreadyAttached = "DEVICE_ALREADY_ATTACHED" { device },
    DeviceAlreadyDetached = "DEVICE_ALREADY_DETACHED" { device },
    DeviceAlreadyExists = "DEVICE_ALREADY_EXISTS" { device },
    DeviceAttachTimeout = "DEVICE_ATTACH_TIMEOUT" { typ, reference },
    DeviceDetachRejected = "DEVICE_DETACH_REJECTED" { typ, reference, msg },
    DeviceDetachTimeout = "DEVICE_DETACH_TIMEOUT" { typ, reference },
    DeviceNotAttached = "DEVICE_NOT_ATTACHED" { vbd },
    DiskVbdMustBeReadwriteForHvm = "DISK_VBD_MUST_BE_READWRITE_FOR_HVM" { vbd },
    DomainBuilderError = "DOMAIN_BUILDER_ERROR" { function, code, message },
    DomainExists = "DOMAIN_EXISTS" { vm, domid },
    DuplicatePifDeviceName = "DUPLICATE_PIF_DEVICE_NAME" { device },
    DuplicateVm = "DUPLICATE_VM" { vm },
    EventsLost = "EVENTS_LOST" {},
    EventFromTokenParseFailure = "EVENT_FROM_TOKEN_PARSE_FAILURE" { token },
    EventSubscriptionParseFailure = "EVENT_SUBSCRIPTION_PARSE_FAILURE" { subscription },
    FeatureRequiresHvm = "FEATURE_REQUIRES_HVM" { details },
    FeatureRestricted = "FEATURE_RESTRICTED" {},
    FieldTypeError = "FIELD_TYPE_ERROR" { field },
    GpuGroupContainsNoPgpus = "GPU_GROUP_CONTAINS_NO_PGPUS" { gpu_group },
    GpuGroupContainsPgpu = "GPU_GROUP_CONTAINS_PGPU" { pgpus },
    GpuGroupContainsVgpu = "GPU_GROUP_CONTAINS_VGPU" { vgpus },
    HandleInvalid = "HANDLE_INVALID" { class, handle },
    HaAbortNewMaster = "HA_ABORT_NEW_MASTER" { reason },
    HaCannotChangeBondStatusOfMgmtIface = "HA_CANNOT_CHANGE_BOND_STATUS_OF_MGMT_IFACE" {},
    HaConstraintViolationNetworkNotShared = "HA_CONSTRAINT_VIOLATION_NETWORK_NOT_SHARED" { network },
    HaConstraintViolationSrNotShared = "HA_CONSTRAINT_VIOLATION_SR_NOT_SHARED" { sr },
    HaFailedToFormLiveset = "HA_FAILED_TO_FORM_LIVESET" {},
    HaHeartbeatDaemonStartupFailed = "HA_HEARTBEAT_DAEMON_STARTUP_FAILED" {},
    HaHostCannotAccessStatefile = "HA_HOST_CANNOT_ACCESS_STATEFILE" {},
    HaHostCannotSeePeers = "HA_HOST_CANNOT_SEE_PEERS" { host, all, subset },
    HaHostIsArmed = "HA_HOST_IS_ARMED" { host },
    HaIsEnabled = "HA_IS_ENABLED" {},
    HaLostStatefile = "HA_LOST_STATEFILE" {},
    HaNotEnabled = "HA_NOT_ENABLED" {},
    HaNotInstalled = "HA_NOT_INSTALLED" { host },
    HaNoPlan = "HA_NO_PLAN" {},
    HaOperationWouldBreakFailoverPlan = "HA_OPERATION_WOULD_BREAK_FAILOVER_PLAN" {},
    HaPoolIsEnabledButHostIsDisabled = "HA_POOL_IS_ENABLED_BUT_HOST_IS_DISABLED" {},
    HaShouldBeFenced = "HA_SHOULD_BE_FENCED" { host },
    HaTooFewHosts = "HA_TOO_FEW_HOSTS" {},
    HostsNotCompatible = "HOSTS_NOT_COMPATIBLE" {},
    HostsNotHomogeneous = "HOSTS_NOT_HOMOGENEOUS" { reason },
    HostBroken = "HOST_BROKEN" {},
    HostCannotAttachNetwork = "HOST_CANNOT_ATTACH_NETWORK" { host, network },
    HostCannotDestroySelf = "HOST_CANNOT_DESTROY_SELF" { host },
    HostCannotReadMetrics = "HOST_CANNOT_READ_METRICS" {},
    HostCdDriveEmpty = "HOST_CD_DRIVE_EMPTY" {},
    HostDisabled = "HOST_DISABLED" { host },
    HostDisabledUntilReboot = "HOST_DISABLED_UNTIL_REBOOT" { host },
    HostEvacuateInProgress = "HOST_EVACUATE_IN_PROGRESS" { host },
    HostHasNoManagementIp = "HOST_HAS_NO_MANAGEMENT_IP" {},
    HostHasResidentVms = "HOST_HAS_RESIDENT_VMS" { host },
    HostInEmergencyMode = "HOST_IN_EMERGENCY_MODE" {},
    HostInUse = "HOST_IN_USE" { host, typ, reference },
    HostIsLive = "HOST_IS_LIVE" { host },
    HostIsSlave = "HOST_IS_SLAVE" { master_ip_address },
    HostItsOwnSlave = "HOST_ITS_OWN_SLAVE" {},
    HostMasterCannotTalkBack = "HOST_MASTER_CANNOT_TALK_BACK" { ip },
    HostNameInvalid = "HOST_NAME_INVALID" { reason },
    HostNotDisabled = "HOST_NOT_DISABLED" {},
    HostNotEnoughFreeMemory = "HOST_NOT_ENOUGH_FREE_MEMORY" { needed, available },
    HostNotLive = "HOST_NOT_LIVE" {},
    HostOffline = "HOST_OFFLINE" { host },
    HostPowerOnModeDisabled = "HOST_POWER_ON_MODE_DISABLED" {},
    HostStillBooting = "HOST_STILL_BOOTING" {},
    HostUnknownToMaster = "HOST_UNKNOWN_TO_MASTER" { host },
    IllegalVbdDevice = "ILLEGAL_VBD_DEVICE" { vbd, device },
    ImportError = "IMPORT_ERROR" { msg },
    ImportErrorAttachedDisksNotFound = "IMPORT_ERROR_ATTACHED_DISKS_NOT_FOUND" {},
    ImportErrorCannotHandleChunked = "IMPORT_ERROR_CANNOT_HANDLE_CHUNKED" {},
    ImportErrorFailedToFindObject = "IMPORT_ERROR_FAILED_TO_FIND_OBJECT" { id },
    ImportErrorPrematureEof = "IMPORT_ERROR_PREMATURE_EOF" {},
    ImportErrorSomeChecksumsFailed = "IMPORT_ERROR_SOME_CHECKSUMS_FAILED" {},
    ImportErrorUnexpectedFile = "IMPORT_ERROR_UNEXPECTED_FILE" { filename_expected, filename_found },
    ImportIncompatibleVersion = "IMPORT_INCOMPATIBLE_VERSION" {},
    IncompatiblePoolNetworkBackend = "INCOMPATIBLE_POOL_NETWORK_BACKEND" {},
    IncompatibleStatefileSr = "INCOMPATIBLE_STATEFILE_SR" { sr_type },
    InterfaceHasNoIp = "INTERFACE_HAS_NO_IP" { pif },
    InternalError = "INTERNAL_ERROR" { message },
    InvalidCidrAddressSpecified = "INVALID_CIDR_ADDRESS_SPECIFIED" { address },
    InvalidDevice = "INVALID_DEVICE" { device },
    InvalidEdition = "INVALID_EDITION" { edition },
    InvalidFeatureString = "INVALID_FEATURE_STRING" { details },
    InvalidIpAddressSpecified = "INVALID_IP_ADDRESS_SPECIFIED" { parameter },
    InvalidPatch = "INVALID_PATCH" {},
    InvalidPatchWithLog = "INVALID_PATCH_WITH_LOG" { log },
    InvalidValue = "INVALID_VALUE" { field, value },
    IsTunnelAccessPif = "IS_TUNNEL_ACCESS_PIF" { pif },
    JoiningHostCannotBeMasterOfOtherHosts = "JOINING_HOST_CANNOT_BE_MASTER_OF_OTHER_HOSTS" {},
    JoiningHostCannotContainSharedSrs = "JOINING_HOST_CANNOT_CONTAIN_SHARED_SRS" {},
    JoiningHostCannotHaveRunningOrSuspendedVms = "JOINING_HOST_CANNOT_HAVE_RUNNING_OR_SUSPENDED_VMS" {},
    JoiningHostCannotHaveRunningVms = "JOINING_HOST_CANNOT_HAVE_RUNNING_VMS" {},
    JoiningHostCannotHaveVmsWithCurrentOperations = "JOINING_HOST_CANNOT_HAVE_VMS_WITH_CURRENT_OPERATIONS" {},
    JoiningHostConnectionFailed = "JOINING_HOST_CONNECTION_FAILED" {},
    JoiningHostServiceFailed = "JOINING_HOST_SERVICE_FAILED" {},
    LicenceRestriction = "LICENCE_RESTRICTION" { feature },
    LicenseCannotDowngradeWhileInPool = "LICENSE_CANNOT_DOWNGRADE_WHILE_IN_POOL" {},
    LicenseCheckoutError = "LICENSE_CHECKOUT_ERROR" { reason },
    LicenseDoesNotSupportPooling = "LICENSE_DOES_NOT_SUPPORT_POOLING" {},
    LicenseDoesNotSupportXha = "LICENSE_DOES_NOT_SUPPORT_XHA" {},
    LicenseExpired = "LICENSE_EXPIRED" {},
    LicenseFileDeprecated = "LICENSE_FILE_DEPRECATED" {},
    LicenseHostPoolMismatch = "LICENSE_HOST_POOL_MISMATCH" {},
    LicenseProcessingError = "LICENSE_PROCESSING_ERROR" {},
    LocationNotUnique = "LOCATION_NOT_UNIQUE" { sr, location },
    MacDoesNotExist = "MAC_DOES_NOT_EXIST" { mac },
    MacInvalid = "MAC_INVALID" { mac },
    MacStillExists = "MAC_STILL_EXISTS" { mac },
    MapDuplicateKey = "MAP_DUPLICATE_KEY" { typ, param_name, uuid, key },
    MemoryConstraintViolation = "MEMORY_CONSTRAINT_VIOLATION" { constraint },
    MessageDeprecated = "MESSAGE_DEPRECATED" {},
    MessageMethodUnknown = "MESSAGE_METHOD_UNKNOWN" { method },
    MessageParameterCountMismatch = "MESSAGE_PARAMETER_COUNT_MISMATCH" { method, expected, received },
    MessageRemoved = "MESSAGE_REMOVED" {},
    MirrorFailed = "MIRROR_FAILED" { vdi },
    MissingConnectionDetails = "MISSING_CONNECTION_DETAILS" {},
    NetworkAlreadyConnected = "NETWORK_ALREADY_CONNECTED" { network, connected_pif },
    NetworkContainsPif = "NETWORK_CONTAINS_PIF" { pifs },
    NetworkContainsVif = "NETWORK_CONTAINS_VIF" { vifs },
    NotAllowedOnOemEdition = "NOT_ALLOWED_ON_OEM_EDITION" { command },
    NotImplemented = "NOT_IMPLEMENTED" { function },
    NotInEmergencyMode = "NOT_IN_EMERGENCY_MODE" {},
    NotSupportedDuringUpgrade = "NOT_SUPPORTED_DURING_UPGRADE" {},
    NotSystemDomain = "NOT_SYSTEM_DOMAIN" { vm },
    NoHostsAvailable = "NO_HOSTS_AVAILABLE" {},
    NoMoreRedoLogsAllowed = "NO_MORE_REDO_LOGS_ALLOWED" {},
    ObjectNolongerExists = "OBJECT_NOLONGER_EXISTS" {},
    OnlyAllowedOnOemEdition = "ONLY_ALLOWED_ON_OEM_EDITION" { command },
    OperationBlocked = "OPERATION_BLOCKED" { reference, code },
    OperationNotAllowed = "OPERATION_NOT_ALLOWED" { reason },
    OperationPartiallyFailed = "OPERATION_PARTIALLY_FAILED" { operation },
    OtherOperationInProgress = "OTHER_OPERATION_IN_PROGRESS" { class, object },
    OutOfSpace = "OUT_OF_SPACE" { location },
    PatchAlreadyApplied = "PATCH_ALREADY_APPLIED" { patch },
    PatchAlreadyExists = "PATCH_ALREADY_EXISTS" { uuid },
    PatchApplyFailed = "PATCH_APPLY_FAILED" { output },
    PatchIsApplied = "PATCH_IS_APPLIED" {},
    PatchPrecheckFailedPrerequisiteMissing = "PATCH_PRECHECK_FAILED_PREREQUISITE_MISSING" { patch, prerequisite_patch_uuid_list },
    PatchPrecheckFailedUnknownError = "PATCH_PRECHECK_FAILED_UNKNOWN_ERROR" { patch, info },
    PatchPrecheckFailedVmRunning = "PATCH_PRECHECK_FAILED_VM_RUNNING" { patch },
    PatchPrecheckFailedWrongServerBuild = "PATCH_PRECHECK_FAILED_WRONG_SERVER_BUILD" { patch, found_build, required_build },
    PatchPrecheckFailedWrongServerVersion = "PATCH_PRECHECK_FAILED_WRONG_SERVER_VERSION" { patch, found_version, required_version },
    PbdExists = "PBD_EXISTS" { sr, host, pbd },
    PermissionDenied = "PERMISSION_DENIED" { message },
    PgpuInUseByVm = "PGPU_IN_USE_BY_VM" { vms },
    PgpuNotCompatibleWithGpuGroup = "PGPU_NOT_COMPATIBLE_WITH_GPU_GROUP" { typ, group_types },
    PifAlreadyBonded = "PIF_ALREADY_BONDED" { pif },
    PifBondNeedsMoreMembers = "PIF_BOND_NEEDS_MORE_MEMBERS" {},
    PifCannotBondCrossHost = "PIF_CANNOT_BOND_CROSS_HOST" {},
    PifConfigurationError = "PIF_CONFIGURATION_ERROR" { pif, msg },
    PifDeviceNotFound = "PIF_DEVICE_NOT_FOUND" {},
    PifDoesNotAllowUnplug = "PIF_DOES_NOT_ALLOW_UNPLUG" { pif },
    PifHasNoNetworkConfiguration = "PIF_HAS_NO_NETWORK_CONFIGURATION" {},
    PifHasNoV6NetworkConfiguration = "PIF_HAS_NO_V6_NETWORK_CONFIGURATION" {},
    PifIncompatiblePrimaryAddressType = "PIF_INCOMPATIBLE_PRIMARY_ADDRESS_TYPE" {},
    PifIsManagementInterface = "PIF_IS_MANAGEMENT_INTERFACE" { pif },
    PifIsPhysical = "PIF_IS_PHYSICAL" { pif },
    PifIsVlan = "PIF_IS_VLAN" { pif },
    PifTunnelStillExists = "PIF_TUNNEL_STILL_EXISTS" { pif },
    PifVlanExists = "PIF_VLAN_EXISTS" { pif },
    PifVlanStillExists = "PIF_VLAN_STILL_EXISTS" { pif },
    PoolAuthAlreadyEnabled = "POOL_AUTH_ALREADY_ENABLED" { host },
    PoolAuthDisableFailed = "POOL_AUTH_DISABLE_FAILED" { host, message },
    PoolAuthDisableFailedPermissionDenied = "POOL_AUTH_DISABLE_FAILED_PERMISSION_DENIED" { host, message },
    PoolAuthDisableFailedWrongCredentials = "POOL_AUTH_DISABLE_FAILED_WRONG_CREDENTIALS" { host, message },
    PoolAuthEnableFailed = "POOL_AUTH_ENABLE_FAILED" { host, message },
    PoolAuthEnableFailedDomainLookupFailed = "POOL_AUTH_ENABLE_FAILED_DOMAIN_LOOKUP_FAILED" { host, message },
    PoolAuthEnableFailedDuplicateHostname = "POOL_AUTH_ENABLE_FAILED_DUPLICATE_HOSTNAME" { host, message },
    PoolAuthEnableFailedInvalidOu = "POOL_AUTH_ENABLE_FAILED_INVALID_OU" { host, message },
    PoolAuthEnableFailedPermissionDenied = "POOL_AUTH_ENABLE_FAILED_PERMISSION_DENIED" { host, message },
    PoolAuthEnableFailedWrongCredentials = "POOL_AUTH_ENABLE_FAILED_WRONG_CREDENTIALS" { host, message },
    PoolJoiningExternalAuthMismatch = "POOL_JOINING_EXTERNAL_AUTH_MISMATCH" {},
    PoolJoiningHostMustHavePhysicalManagementNic = "POOL_JOINING_HOST_MUST_HAVE_PHYSICAL_MANAGEMENT_NIC" {},
    PoolJoiningHostMustHaveSameProductVersion = "POOL_JOINING_HOST_MUST_HAVE_SAME_PRODUCT_VERSION" {},
    PoolJoiningHostMustOnlyHavePhysicalPifs = "POOL_JOINING_HOST_MUST_ONLY_HAVE_PHYSICAL_PIFS" {},
    ProvisionFailedOutOfSpace = "PROVISION_FAILED_OUT_OF_SPACE" {},
    ProvisionOnlyAllowedOnTemplate = "PROVISION_ONLY_ALLOWED_ON_TEMPLATE" {},
    RbacPermissionDenied = "RBAC_PERMISSION_DENIED" { permission, message },
    RedoLogIsEnabled = "REDO_LOG_IS_ENABLED" {},
    RequiredPifIsUnplugged = "REQUIRED_PIF_IS_UNPLUGGED" { pif },
    RestoreIncompatibleVersion = "RESTORE_INCOMPATIBLE_VERSION" {},
    RestoreScriptFailed = "RESTORE_SCRIPT_FAILED" { log },
    RestoreTargetMgmtIfNotInBackup = "RESTORE_TARGET_MGMT_IF_NOT_IN_BACKUP" {},
    RestoreTargetMissingDevice = "RESTORE_TARGET_MISSING_DEVICE" { device },
    RoleAlreadyExists = "ROLE_ALREADY_EXISTS" {},
    RoleNotFound = "ROLE_NOT_FOUND" {},
    SessionAuthenticationFailed = "SESSION_AUTHENTICATION_FAILED" {},
    SessionInvalid = "SESSION_INVALID" { handle },
    SessionNotRegistered = "SESSION_NOT_REGISTERED" { handle },
    SlaveRequiresManagementInterface = "SLAVE_REQUIRES_MANAGEMENT_INTERFACE" {},
    SmPluginCommunicationFailure = "SM_PLUGIN_COMMUNICATION_FAILURE" { sm },
    SrAttachFailed = "SR_ATTACH_FAILED" { sr },
    SrBackendFailure = "SR_BACKEND_FAILURE" { status, stdout, stderr },
    SrDeviceInUse = "SR_DEVICE_IN_USE" {},
    SrDoesNotSupportMigration = "SR_DOES_NOT_SUPPORT_MIGRATION" { sr },
    SrFull = "SR_FULL" { requested, maximum },
    SrHasMultiplePbds = "SR_HAS_MULTIPLE_PBDS" { pbd },
    SrHasNoPbds = "SR_HAS_NO_PBDS" {},
    SrHasPbd = "SR_HAS_PBD" { sr },
    SrIndestructible = "SR_INDESTRUCTIBLE" { sr },
    SrIsCacheSr = "SR_IS_CACHE_SR" { host },
    SrNotAttached = "SR_NOT_ATTACHED" { sr },
    SrNotEmpty = "SR_NOT_EMPTY" {},
    SrNotSharable = "SR_NOT_SHARABLE" { sr, host },
    SrOperationNotSupported = "SR_OPERATION_NOT_SUPPORTED" { sr },
    SrRequiresUpgrade = "SR_REQUIRES_UPGRADE" { sr },
    SrUnknownDriver = "SR_UNKNOWN_DRIVER" { driver },
    SrUuidExists = "SR_UUID_EXISTS" { uuid },
    SrVdiLockingFailed = "SR_VDI_LOCKING_FAILED" {},
    SslVerifyError = "SSL_VERIFY_ERROR" { reason },
    SubjectAlreadyExists = "SUBJECT_ALREADY_EXISTS" {},
    SubjectCannotBeResolved = "SUBJECT_CANNOT_BE_RESOLVED" {},
    SystemStatusMustUseTarOnOem = "SYSTEM_STATUS_MUST_USE_TAR_ON_OEM" {},
    SystemStatusRetrievalFailed = "SYSTEM_STATUS_RETRIEVAL_FAILED" { reason },
    TaskCancelled = "TASK_CANCELLED" { task },
    TooBusy = "TOO_BUSY" {},
    TooManyPendingTasks = "TOO_MANY_PENDING_TASKS" {},
    TooManyStorageMigrates = "TOO_MANY_STORAGE_MIGRATES" { number },
    TransportPifNotConfigured = "TRANSPORT_PIF_NOT_CONFIGURED" { pif },
    UnimplementedInSmBackend = "UNIMPLEMENTED_IN_SM_BACKEND" { message },
    UnknownBootloader = "UNKNOWN_BOOTLOADER" { vm, bootloader },
    UserIsNotLocalSuperuser = "USER_IS_NOT_LOCAL_SUPERUSER" { msg },
    UuidInvalid = "UUID_INVALID" { typ, uuid },
    V6dFailure = "V6D_FAILURE" {},
    ValueNotSupported = "VALUE_NOT_SUPPORTED" { field, value, reason },
    VbdCdsMustBeReadonly = "VBD_CDS_MUST_BE_READONLY" {},
    VbdIsEmpty = "VBD_IS_EMPTY" { vbd },
    VbdNotEmpty = "VBD_NOT_EMPTY" { vbd },
    VbdNotRemovableMedia = "VBD_NOT_REMOVABLE_MEDIA" { vbd },
    VbdNotUnpluggable = "VBD_NOT_UNPLUGGABLE" { vbd },
    VbdTrayLocked = "VBD_TRAY_LOCKED" { vbd },
    VdiContainsMetadataOfThisPool = "VDI_CONTAINS_METADATA_OF_THIS_POOL" { vdi, pool },
    VdiHasRrds = "VDI_HAS_RRDS" { vdi },
    VdiIncompatibleType = "VDI_INCOMPATIBLE_TYPE" { vdi, typ },
    VdiInUse = "VDI_IN_USE" { vdi, operation },
    VdiIsAPhysicalDevice = "VDI_IS_A_PHYSICAL_DEVICE" { vdi },
    VdiIsNotIso = "VDI_IS_NOT_ISO" { vdi, iso_type },
    VdiIsSharable = "VDI_IS_SHARABLE" { vdi },
    VdiLocationMissing = "VDI_LOCATION_MISSING" { sr, location },
    VdiMissing = "VDI_MISSING" { sr, vdi },
    VdiNeedsVmForMigrate = "VDI_NEEDS_VM_FOR_MIGRATE" { vdi },
    VdiNotAvailable = "VDI_NOT_AVAILABLE" { vdi },
    VdiNotInMap = "VDI_NOT_IN_MAP" { vdi },
    VdiNotManaged = "VDI_NOT_MANAGED" { vdi },
    VdiNotSparse = "VDI_NOT_SPARSE" { vdi },
    VdiOnBootModeIncompatibleWithOperation = "VDI_ON_BOOT_MODE_INCOMPATIBLE_WITH_OPERATION" {},
    VdiReadonly = "VDI_READONLY" { vdi },
    VdiTooLarge = "VDI_TOO_LARGE" { vdi, maximum_size },
    VdiTooSmall = "VDI_TOO_SMALL" { vdi, minimum_size },
    VgpuTypeNotCompatibleWithRunningType = "VGPU_TYPE_NOT_COMPATIBLE_WITH_RUNNING_TYPE" { pgpu, typ, running_type },
    VgpuTypeNotEnabled = "VGPU_TYPE_NOT_ENABLED" { typ, enabled_types },
    VgpuTypeNotSupported = "VGPU_TYPE_NOT_SUPPORTED" { typ, supported_types },
    VifInUse = "VIF_IN_USE" { network, vif },
    VifNotInMap = "VIF_NOT_IN_MAP" { vif },
    VlanInUse = "VLAN_IN_USE" { device, vlan },
    VlanTagInvalid = "VLAN_TAG_INVALID" { vlan },
    VmppArchiveMoreFrequentThanBackup = "VMPP_ARCHIVE_MORE_FREQUENT_THAN_BACKUP" {},
    VmppHasVm = "VMPP_HAS_VM" {},
    VmsFailedToCooperate = "VMS_FAILED_TO_COOPERATE" {},
    VmAssignedToProtectionPolicy = "VM_ASSIGNED_TO_PROTECTION_POLICY" { vm, vmpp },
    VmAttachedToMoreThanOneVdiWithTimeoffsetMarkedAsResetOnBoot = "VM_ATTACHED_TO_MORE_THAN_ONE_VDI_WITH_TIMEOFFSET_MARKED_AS_RESET_ON_BOOT" { vm },
    VmBadPowerState = "VM_BAD_POWER_STATE" { vm, expected, actual },
    VmBiosStringsAlreadySet = "VM_BIOS_STRINGS_ALREADY_SET" {},
    VmCannotDeleteDefaultTemplate = "VM_CANNOT_DELETE_DEFAULT_TEMPLATE" { vm },
    VmCheckpointResumeFailed = "VM_CHECKPOINT_RESUME_FAILED" { vm },
    VmCheckpointSuspendFailed = "VM_CHECKPOINT_SUSPEND_FAILED" { vm },
    VmCrashed = "VM_CRASHED" { vm },
    VmDuplicateVbdDevice = "VM_DUPLICATE_VBD_DEVICE" { vm, vbd, device },
    VmFailedShutdownAcknowledgment = "VM_FAILED_SHUTDOWN_ACKNOWLEDGMENT" {},
    VmHalted = "VM_HALTED" { vm },
    VmHasCheckpoint = "VM_HAS_CHECKPOINT" { vm },
    VmHasPciAttached = "VM_HAS_PCI_ATTACHED" { vm },
    VmHasTooManySnapshots = "VM_HAS_TOO_MANY_SNAPSHOTS" { vm },
    VmHostIncompatibleVersion = "VM_HOST_INCOMPATIBLE_VERSION" { host, vm },
    VmHvmRequired = "VM_HVM_REQUIRED" { vm },
    VmIncompatibleWithThisHost = "VM_INCOMPATIBLE_WITH_THIS_HOST" { vm, host, reason },
    VmIsPartOfAnAppliance = "VM_IS_PART_OF_AN_APPLIANCE" { vm, appliance },
    VmIsProtected = "VM_IS_PROTECTED" { vm },
    VmIsTemplate = "VM_IS_TEMPLATE" { vm },
    VmLacksFeatureShutdown = "VM_LACKS_FEATURE_SHUTDOWN" { vm },
    VmLacksFeatureSuspend = "VM_LACKS_FEATURE_SUSPEND" { vm },
    VmMemorySizeTooLow = "VM_MEMORY_SIZE_TOO_LOW" { vm },
    VmMigrateFailed = "VM_MIGRATE_FAILED" { vm, source, destination, msg },
    VmMissingPvDrivers = "VM_MISSING_PV_DRIVERS" { vm },
    VmNotResidentHere = "VM_NOT_RESIDENT_HERE" { vm, host },
    VmNoCrashdumpSr = "VM_NO_CRASHDUMP_SR" { vm },
    VmNoEmptyCdVbd = "VM_NO_EMPTY_CD_VBD" { vm },
    VmNoSuspendSr = "VM_NO_SUSPEND_SR" { vm },
    VmOldPvDrivers = "VM_OLD_PV_DRIVERS" { vm, major, minor },
    VmPvDriversInUse = "VM_PV_DRIVERS_IN_USE" { vm },
    VmRebooted = "VM_REBOOTED" { vm },
    VmRequiresGpu = "VM_REQUIRES_GPU" { vm, gpu_group },
    VmRequiresIommu = "VM_REQUIRES_IOMMU" { host },
    VmRequiresNetwork = "VM_REQUIRES_NETWORK" { vm, network },
    VmRequiresSr = "VM_REQUIRES_SR" { vm, sr },
    VmRequiresVdi = "VM_REQUIRES_VDI" { vm, vdi },
    VmRevertFailed = "VM_REVERT_FAILED" { vm, snapshot },
    VmShutdownTimeout = "VM_SHUTDOWN_TIMEOUT" { vm, timeout },
    VmSnapshotWithQuiesceFailed = "VM_SNAPSHOT_WITH_QUIESCE_FAILED" { vm },
    VmSnapshotWithQuiesceNotSupported = "VM_SNAPSHOT_WITH_QUIESCE_NOT_SUPPORTED" { vm, error },
    VmSnapshotWithQuiescePluginDeosNotRespond = "VM_SNAPSHOT_WITH_QUIESCE_PLUGIN_DEOS_NOT_RESPOND" { vm },
    VmSnapshotWithQuiesceTimeout = "VM_SNAPSHOT_WITH_QUIESCE_TIMEOUT" { vm },
    VmTooManyVcpus = "VM_TOO_MANY_VCPUS" { vm },
    VmToImportIsNotNewerVersion = "VM_TO_IMPORT_IS_NOT_NEWER_VERSION" { vm, existing_version, version_to_import },
    VmUnsafeBoot = "VM_UNSAFE_BOOT" { vm },
    WlbAuthenticationFailed = "WLB_AUTHENTICATION_FAILED" {},
    WlbConnectionRefused = "WLB_CONNECTION_REFUSED" {},
    WlbConnectionReset = "WLB_CONNECTION_RESET" {},
    WlbDisabled = "WLB_DISABLED" {},
    WlbInternalError = "WLB_INTERNAL_ERROR" {},
    WlbMalformedRequest = "WLB_MALFORMED_REQUEST" {},
    WlbMalformedResponse = "WLB_MALFORMED_RESPONSE" { method, reason, response },
    WlbNotInitialized = "WLB_NOT_INITIALIZED" {},
    WlbTimeout = "WLB_TIMEOUT" { configured_timeout },
    WlbUnknownHost = "WLB_UNKNOWN_HOST" {},
    WlbUrlInvalid = "WLB_URL_INVALID" { url },
    WlbXenserverAuthenticationFailed = "WLB_XENSERVER_AUTHENTICATION_FAILED" {},
    WlbXenserverConnectionRefused = "WLB_XENSERVER_CONNECTION_REFUSED" {},
    WlbXenserverMalformedResponse = "WLB_XENSERVER_MALFORMED_RESPONSE" {},
    WlbXenserverTimeout = "WLB_XENSERVER_TIMEOUT" {},
    WlbXenserverUnknownHost = "WLB_XENSERVER_UNKNOWN_HOST" {},
    XapiHookFailed = "XAPI_HOOK_FAILED" { hook_name, reason, stdout, exit_code },
    XenapiMissingPlugin = "XENAPI_MISSING_PLUGIN" { name },
    XenapiPluginFailure = "XENAPI_PLUGIN_FAILURE" { status, stdout, stderr },
    XmlrpcUnmarshalFailure = "XMLRPC_UNMARSHAL_FAILURE" { value, msg },
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.code() {
            "" => f.write_str("empty error description")?,
            code => f.write_str(code)?,
        }

        for (name, value) in self.fields() {
            write!(f, " {name}={value:?}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Checks the `Status` of a response envelope and returns its payload.
///
/// A successful envelope without `Value` yields `Value::Null`, which is
/// what void calls return.
pub fn check_response(response: Value) -> Result<Value, Error> {
    let Value::Struct(mut members) = response else {
        return Err(Error::BadServerResponse(response));
    };

    let status = members
        .get("Status")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    match status.as_str() {
        "Success" => Ok(members.remove("Value").unwrap_or(Value::Null)),
        "Failure" => {
            let description = members
                .get("ErrorDescription")
                .and_then(Value::as_array)
                .map(|params| {
                    params
                        .iter()
                        .map(|param| param.to_string_lossy().into_owned())
                        .collect::<Vec<_>>()
                });
            let Some(description) = description else {
                return Err(Error::BadServerResponse(Value::Struct(members)));
            };

            let err = ApiError::from_description(&description);
            debug!(message = "call failed", code = err.code());

            Err(Error::Api(err))
        }
        _ => Err(Error::BadServerResponse(Value::Struct(members))),
    }
}

/// Parses a whole `methodResponse` document and checks its envelope.
pub fn check_document(xml: &str) -> Result<Value, Error> {
    match xmlrpc::parse_response(xml)? {
        xmlrpc::Response::Success(response) => check_response(response),
        xmlrpc::Response::Fault { code, message } => Err(Error::Fault { code, message }),
    }
}
