//! Field tables for `/proc/self/mountstats` statistic lines.
//!
//! Each table maps the positional values of one line kind to metric names.
//! Table length is the minimum number of values a line must carry to be
//! decoded with that table (per-operation lines are the exception, see
//! `decode`).

/// `events:` line, 27 counters.
pub static EVENTS_FIELDS: [&str; 27] = [
    "inoderevalidates",
    "dentryrevalidates",
    "datainvalidates",
    "attrinvalidates",
    "vfsopen",
    "vfslookup",
    "vfspermission",
    "vfsupdatepage",
    "vfsreadpage",
    "vfsreadpages",
    "vfswritepage",
    "vfswritepages",
    "vfsreaddir",
    "vfssetattr",
    "vfsflush",
    "vfsfsync",
    "vfslock",
    "vfsrelease",
    "congestionwait",
    "setattrtrunc",
    "extendwrite",
    "sillyrenames",
    "shortreads",
    "shortwrites",
    "delay",
    "pnfsreads",
    "pnfswrites",
];

/// `bytes:` line.
pub static BYTES_FIELDS: [&str; 8] = [
    "normalreadbytes",
    "normalwritebytes",
    "directreadbytes",
    "directwritebytes",
    "serverreadbytes",
    "serverwritebytes",
    "readpages",
    "writepages",
];

/// `xprt: tcp ...` line, after the transport name and source port.
pub static XPRT_TCP_FIELDS: [&str; 9] = [
    "bind_count",
    "connect_count",
    "connect_time",
    "idle_time",
    "rpcsends",
    "rpcreceives",
    "badxids",
    "inflightsends",
    "backlogutil",
];

/// `xprt: udp ...` line, after the transport name and source port.
pub static XPRT_UDP_FIELDS: [&str; 6] = [
    "bind_count",
    "rpcsends",
    "rpcreceives",
    "badxids",
    "inflightsends",
    "backlogutil",
];

/// Per-operation line (`READ: ...`), shared by every NFS operation.
pub static OP_FIELDS: [&str; 8] = [
    "ops",
    "trans",
    "timeouts",
    "bytes_sent",
    "bytes_recv",
    "queue_time",
    "response_time",
    "total_time",
];

macro_rules! nfs_operations {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// NFS operation names that appear as per-operation lines.
        ///
        /// This is the union of the NFSv3 and NFSv4 sets; use
        /// [`Operation::in_version`] for membership.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Operation {
            $($variant),+
        }

        impl Operation {
            /// Kernel spelling of the operation, e.g. `"READDIRPLUS"`.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Operation::$variant => $name),+
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Operation::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

nfs_operations! {
    Null => "NULL",
    Getattr => "GETATTR",
    Setattr => "SETATTR",
    Lookup => "LOOKUP",
    Access => "ACCESS",
    Readlink => "READLINK",
    Read => "READ",
    Write => "WRITE",
    Create => "CREATE",
    Mkdir => "MKDIR",
    Symlink => "SYMLINK",
    Mknod => "MKNOD",
    Remove => "REMOVE",
    Rmdir => "RMDIR",
    Rename => "RENAME",
    Link => "LINK",
    Readdir => "READDIR",
    Readdirplus => "READDIRPLUS",
    Fsstat => "FSSTAT",
    Fsinfo => "FSINFO",
    Pathconf => "PATHCONF",
    Commit => "COMMIT",
    Open => "OPEN",
    OpenConfirm => "OPEN_CONFIRM",
    OpenNoattr => "OPEN_NOATTR",
    OpenDowngrade => "OPEN_DOWNGRADE",
    Close => "CLOSE",
    Renew => "RENEW",
    Setclientid => "SETCLIENTID",
    SetclientidConfirm => "SETCLIENTID_CONFIRM",
    Lock => "LOCK",
    Lockt => "LOCKT",
    Locku => "LOCKU",
    LookupRoot => "LOOKUP_ROOT",
    Statfs => "STATFS",
    ServerCaps => "SERVER_CAPS",
    Delegreturn => "DELEGRETURN",
    Getacl => "GETACL",
    Setacl => "SETACL",
    FsLocations => "FS_LOCATIONS",
    ReleaseLockowner => "RELEASE_LOCKOWNER",
    Secinfo => "SECINFO",
    FsidPresent => "FSID_PRESENT",
    ExchangeId => "EXCHANGE_ID",
    CreateSession => "CREATE_SESSION",
    DestroySession => "DESTROY_SESSION",
    Sequence => "SEQUENCE",
    GetLeaseTime => "GET_LEASE_TIME",
    ReclaimComplete => "RECLAIM_COMPLETE",
    Layoutget => "LAYOUTGET",
    Getdeviceinfo => "GETDEVICEINFO",
    Layoutcommit => "LAYOUTCOMMIT",
    Layoutreturn => "LAYOUTRETURN",
    SecinfoNoName => "SECINFO_NO_NAME",
    TestStateid => "TEST_STATEID",
    FreeStateid => "FREE_STATEID",
    Getdevicelist => "GETDEVICELIST",
    BindConnToSession => "BIND_CONN_TO_SESSION",
    DestroyClientid => "DESTROY_CLIENTID",
    Seek => "SEEK",
    Allocate => "ALLOCATE",
    Deallocate => "DEALLOCATE",
    Layoutstats => "LAYOUTSTATS",
    Clone => "CLONE",
}

/// NFS protocol version of a mount, from the `RPC iostats` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolVersion {
    V3,
    V4,
}

impl ProtocolVersion {
    /// Parses the version part of `p/v: 100003/<version>`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "3" => Some(ProtocolVersion::V3),
            "4" => Some(ProtocolVersion::V4),
            _ => None,
        }
    }

    /// Operations reported for mounts of this version.
    pub fn operations(self) -> &'static [Operation] {
        match self {
            ProtocolVersion::V3 => NFS3_OPERATIONS,
            ProtocolVersion::V4 => NFS4_OPERATIONS,
        }
    }
}

pub static NFS3_OPERATIONS: &[Operation] = &[
    Operation::Null,
    Operation::Getattr,
    Operation::Setattr,
    Operation::Lookup,
    Operation::Access,
    Operation::Readlink,
    Operation::Read,
    Operation::Write,
    Operation::Create,
    Operation::Mkdir,
    Operation::Symlink,
    Operation::Mknod,
    Operation::Remove,
    Operation::Rmdir,
    Operation::Rename,
    Operation::Link,
    Operation::Readdir,
    Operation::Readdirplus,
    Operation::Fsstat,
    Operation::Fsinfo,
    Operation::Pathconf,
    Operation::Commit,
];

pub static NFS4_OPERATIONS: &[Operation] = &[
    Operation::Null,
    Operation::Read,
    Operation::Write,
    Operation::Commit,
    Operation::Open,
    Operation::OpenConfirm,
    Operation::OpenNoattr,
    Operation::OpenDowngrade,
    Operation::Close,
    Operation::Setattr,
    Operation::Fsinfo,
    Operation::Renew,
    Operation::Setclientid,
    Operation::SetclientidConfirm,
    Operation::Lock,
    Operation::Lockt,
    Operation::Locku,
    Operation::Access,
    Operation::Getattr,
    Operation::Lookup,
    Operation::LookupRoot,
    Operation::Remove,
    Operation::Rename,
    Operation::Link,
    Operation::Symlink,
    Operation::Create,
    Operation::Pathconf,
    Operation::Statfs,
    Operation::Readlink,
    Operation::Readdir,
    Operation::ServerCaps,
    Operation::Delegreturn,
    Operation::Getacl,
    Operation::Setacl,
    Operation::FsLocations,
    Operation::ReleaseLockowner,
    Operation::Secinfo,
    Operation::FsidPresent,
    Operation::ExchangeId,
    Operation::CreateSession,
    Operation::DestroySession,
    Operation::Sequence,
    Operation::GetLeaseTime,
    Operation::ReclaimComplete,
    Operation::Layoutget,
    Operation::Getdeviceinfo,
    Operation::Layoutcommit,
    Operation::Layoutreturn,
    Operation::SecinfoNoName,
    Operation::TestStateid,
    Operation::FreeStateid,
    Operation::Getdevicelist,
    Operation::BindConnToSession,
    Operation::DestroyClientid,
    Operation::Seek,
    Operation::Allocate,
    Operation::Deallocate,
    Operation::Layoutstats,
    Operation::Clone,
];

impl Operation {
    pub fn in_version(self, version: ProtocolVersion) -> bool {
        version.operations().contains(&self)
    }
}

/// Looks up the field table for a category name.
///
/// Accepts `events`, `bytes`, `xprt_tcp`, `xprt_udp` and any NFS operation
/// name; returns `None` for anything else.
pub fn field_table(category: &str) -> Option<&'static [&'static str]> {
    match category {
        "events" => Some(&EVENTS_FIELDS[..]),
        "bytes" => Some(&BYTES_FIELDS[..]),
        "xprt_tcp" => Some(&XPRT_TCP_FIELDS[..]),
        "xprt_udp" => Some(&XPRT_UDP_FIELDS[..]),
        other => Operation::from_name(other).map(|_| &OP_FIELDS[..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lengths() {
        assert_eq!(field_table("events").map(<[_]>::len), Some(27));
        assert_eq!(field_table("bytes").map(<[_]>::len), Some(8));
        assert_eq!(field_table("xprt_tcp").map(<[_]>::len), Some(9));
        assert_eq!(field_table("xprt_udp").map(<[_]>::len), Some(6));
        assert_eq!(field_table("GETATTR"), Some(&OP_FIELDS[..]));
        assert_eq!(field_table("xprt"), None);
        assert_eq!(field_table("getattr"), None);
    }

    #[test]
    fn test_version_sets() {
        assert_eq!(NFS3_OPERATIONS.len(), 22);
        assert_eq!(NFS4_OPERATIONS.len(), 59);

        assert!(Operation::Readdirplus.in_version(ProtocolVersion::V3));
        assert!(!Operation::Readdirplus.in_version(ProtocolVersion::V4));
        assert!(Operation::Sequence.in_version(ProtocolVersion::V4));
        assert!(!Operation::Sequence.in_version(ProtocolVersion::V3));
        assert!(Operation::Read.in_version(ProtocolVersion::V3));
        assert!(Operation::Read.in_version(ProtocolVersion::V4));
    }

    #[test]
    fn test_operation_names_round_trip() {
        for op in NFS3_OPERATIONS.iter().chain(NFS4_OPERATIONS) {
            assert_eq!(Operation::from_name(op.as_str()), Some(*op));
        }
        assert_eq!(Operation::from_name("BIND_CONN_TO_SESSION"), Some(Operation::BindConnToSession));
        assert_eq!(Operation::from_name("FROBNICATE"), None);
    }

    #[test]
    fn test_protocol_version_parse() {
        assert_eq!(ProtocolVersion::parse("3"), Some(ProtocolVersion::V3));
        assert_eq!(ProtocolVersion::parse("4"), Some(ProtocolVersion::V4));
        assert_eq!(ProtocolVersion::parse("2"), None);
        assert_eq!(ProtocolVersion::parse(""), None);
    }
}
