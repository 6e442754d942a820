//! Pre-built mock filesystem scenarios for testing.
//!
//! These scenarios provide realistic `/proc/self/mountstats` content for
//! testing the collector against typical NFS client setups.

use super::filesystem::MockFs;
use crate::collector::DEFAULT_MOUNTSTATS_PATH;

/// Local mounts, one NFSv3 mount (`/mnt/data`) with 8-value per-op lines,
/// one NFSv4.2 mount (`/mnt/home`) whose per-op lines carry the extra
/// error column, and a trailing tmpfs.
pub const MOUNTSTATS: &str = "\
device sysfs mounted on /sys with fstype sysfs
device proc mounted on /proc with fstype proc
device /dev/sda1 mounted on / with fstype ext4
device /dev/sda2 mounted on /boot with fstype ext4
device nas01:/export/data mounted on /mnt/data with fstype nfs statvers=1.1
\topts:\trw,vers=3,rsize=1048576,wsize=1048576,namlen=255,acregmin=3,acregmax=60,acdirmin=30,acdirmax=60,hard,proto=tcp,timeo=600,retrans=2,sec=sys,mountaddr=10.0.0.5,mountvers=3,mountport=20048,mountproto=udp,local_lock=none
\tage:\t4218
\tcaps:\tcaps=0x3fc7,wtmult=512,dtsize=1048576,bsize=0,namlen=255
\tsec:\tflavor=1,pseudoflavor=1
\tevents:\t5210 61044 0 318 10240 2049 90212 4096 0 128 0 512 640 12 64 8 0 10240 0 2 256 0 0 0 0 0 0
\tbytes:\t1048576000 524288000 0 0 1048576000 524288000 256000 128000
\tRPC iostats version: 1.0  p/v: 100003/3 (nfs)
\txprt:\ttcp 875 1 1 0 16 21088 21088 0 21088 0 2 0 0
\tper-op statistics
\t        NULL: 1 1 0 44 24 0 0 0
\t     GETATTR: 5210 5210 0 573100 583520 21 3120 3302
\t     SETATTR: 12 12 0 2112 3264 0 18 19
\t      LOOKUP: 2049 2049 0 258172 491760 6 1480 1530
\t      ACCESS: 640 640 0 76800 76800 2 410 430
\t    READLINK: 0 0 0 0 0 0 0 0
\t        READ: 1000 1002 0 120000 1048704000 12 8200 8350
\t       WRITE: 500 500 0 524352000 68000 40 6100 6230
\t      CREATE: 8 8 0 1568 2176 0 12 13
\t       MKDIR: 2 2 0 392 544 0 3 3
\t     SYMLINK: 0 0 0 0 0 0 0 0
\t       MKNOD: 0 0 0 0 0 0 0 0
\t      REMOVE: 4 4 0 640 576 0 5 5
\t       RMDIR: 0 0 0 0 0 0 0 0
\t      RENAME: 1 1 0 220 260 0 2 2
\t        LINK: 0 0 0 0 0 0 0 0
\t     READDIR: 0 0 0 0 0 0 0 0
\t READDIRPLUS: 64 64 0 8704 262144 0 96 100
\t      FSSTAT: 3 3 0 360 504 0 1 1
\t      FSINFO: 2 2 0 240 328 0 1 1
\t    PATHCONF: 1 1 0 120 140 0 0 0
\t      COMMIT: 10 10 0 1440 1280 0 35 36
device nas02:/home mounted on /mnt/home with fstype nfs4 statvers=1.1
\topts:\trw,vers=4.2,rsize=1048576,wsize=1048576,namlen=255,acregmin=3,acregmax=60,acdirmin=30,acdirmax=60,hard,proto=tcp,timeo=600,retrans=2,sec=sys,clientaddr=10.0.0.21,local_lock=none
\tage:\t8800
\tcaps:\tcaps=0x3fc7,wtmult=512,dtsize=1048576,bsize=0,namlen=255
\tsec:\tflavor=1,pseudoflavor=1
\tevents:\t3300 14020 2 110 2200 980 12044 2048 0 60 0 200 40 6 220 12 14 2200 0 0 100 1 0 0 0 0 0
\tbytes:\t314572800 104857600 0 0 314572800 104857600 76800 25600
\tRPC iostats version: 1.1  p/v: 100003/4 (nfs4)
\txprt:\ttcp 0 1 1 0 0 3300 3300 0 3300 0 1 0 0
\tper-op statistics
\t        NULL: 1 1 0 44 24 0 0 0 0
\t        READ: 300 300 0 48000 314572800 3 2100 2160 0
\t       WRITE: 100 101 0 104857600 17600 12 1500 1540 0
\t      COMMIT: 5 5 0 840 720 0 10 11 0
\t        OPEN: 220 220 0 61600 87120 1 310 330 2
\tOPEN_CONFIRM: 0 0 0 0 0 0 0 0 0
\t       CLOSE: 218 218 0 45344 28776 0 190 200 0
\t     SETATTR: 6 6 0 1392 1728 0 9 9 0
\t      FSINFO: 2 2 0 320 432 0 1 1 0
\t       RENEW: 0 0 0 0 0 0 0 0 0
\t        LOCK: 14 14 0 3416 1512 0 20 21 0
\t       LOCKU: 14 14 0 2912 1456 0 18 18 0
\t      ACCESS: 410 410 0 73800 68880 2 260 270 0
\t     GETATTR: 3300 3300 0 580800 712800 18 2010 2100 0
\t      LOOKUP: 980 980 0 192080 253680 5 720 750 14
\t      REMOVE: 3 3 0 600 396 0 4 4 0
\t      RENAME: 1 1 0 268 300 0 2 2 0
\t     READDIR: 40 40 0 8640 327680 0 80 84 0
\t SERVER_CAPS: 3 3 0 468 552 0 1 1 0
\t DELEGRETURN: 12 12 0 2688 2016 0 14 15 0
\t EXCHANGE_ID: 2 2 0 560 216 0 3 3 0
\tCREATE_SESSION: 1 1 0 196 124 0 2 2 0
\t    SEQUENCE: 150 150 0 25200 11400 0 120 125 0
\tRECLAIM_COMPLETE: 1 1 0 132 88 0 4 4 0
device tmpfs mounted on /run/user/1000 with fstype tmpfs
";

/// Two NFSv4 mounts (`/mnt/home`, `/mnt/projects`).
pub const MOUNTSTATS_SECOND_V4: &str = "\
device sysfs mounted on /sys with fstype sysfs
device proc mounted on /proc with fstype proc
device /dev/sda1 mounted on / with fstype ext4
device /dev/sda2 mounted on /boot with fstype ext4
device nas02:/home mounted on /mnt/home with fstype nfs4 statvers=1.1
\topts:\trw,vers=4.2,rsize=1048576,wsize=1048576,namlen=255,acregmin=3,acregmax=60,acdirmin=30,acdirmax=60,hard,proto=tcp,timeo=600,retrans=2,sec=sys,clientaddr=10.0.0.21,local_lock=none
\tage:\t8800
\tcaps:\tcaps=0x3fc7,wtmult=512,dtsize=1048576,bsize=0,namlen=255
\tsec:\tflavor=1,pseudoflavor=1
\tevents:\t3300 14020 2 110 2200 980 12044 2048 0 60 0 200 40 6 220 12 14 2200 0 0 100 1 0 0 0 0 0
\tbytes:\t314572800 104857600 0 0 314572800 104857600 76800 25600
\tRPC iostats version: 1.1  p/v: 100003/4 (nfs4)
\txprt:\ttcp 0 1 1 0 0 3300 3300 0 3300 0 1 0 0
\tper-op statistics
\t        NULL: 1 1 0 44 24 0 0 0 0
\t        READ: 300 300 0 48000 314572800 3 2100 2160 0
\t       WRITE: 100 101 0 104857600 17600 12 1500 1540 0
\t      COMMIT: 5 5 0 840 720 0 10 11 0
\t        OPEN: 220 220 0 61600 87120 1 310 330 2
\tOPEN_CONFIRM: 0 0 0 0 0 0 0 0 0
\t       CLOSE: 218 218 0 45344 28776 0 190 200 0
\t     SETATTR: 6 6 0 1392 1728 0 9 9 0
\t      FSINFO: 2 2 0 320 432 0 1 1 0
\t       RENEW: 0 0 0 0 0 0 0 0 0
\t        LOCK: 14 14 0 3416 1512 0 20 21 0
\t       LOCKU: 14 14 0 2912 1456 0 18 18 0
\t      ACCESS: 410 410 0 73800 68880 2 260 270 0
\t     GETATTR: 3300 3300 0 580800 712800 18 2010 2100 0
\t      LOOKUP: 980 980 0 192080 253680 5 720 750 14
\t      REMOVE: 3 3 0 600 396 0 4 4 0
\t      RENAME: 1 1 0 268 300 0 2 2 0
\t     READDIR: 40 40 0 8640 327680 0 80 84 0
\t SERVER_CAPS: 3 3 0 468 552 0 1 1 0
\t DELEGRETURN: 12 12 0 2688 2016 0 14 15 0
\t EXCHANGE_ID: 2 2 0 560 216 0 3 3 0
\tCREATE_SESSION: 1 1 0 196 124 0 2 2 0
\t    SEQUENCE: 150 150 0 25200 11400 0 120 125 0
\tRECLAIM_COMPLETE: 1 1 0 132 88 0 4 4 0
device nas03:/projects mounted on /mnt/projects with fstype nfs4 statvers=1.1
\topts:\trw,vers=4.2,rsize=1048576,wsize=1048576,namlen=255,acregmin=3,acregmax=60,acdirmin=30,acdirmax=60,hard,proto=tcp,timeo=600,retrans=2,sec=sys,clientaddr=10.0.0.21,local_lock=none
\tage:\t120
\tcaps:\tcaps=0x3fc7,wtmult=512,dtsize=1048576,bsize=0,namlen=255
\tsec:\tflavor=1,pseudoflavor=1
\tevents:\t3300 14020 2 110 2200 980 12044 2048 0 60 0 200 40 6 220 12 14 2200 0 0 100 1 0 0 0 0 0
\tbytes:\t314572800 104857600 0 0 314572800 104857600 76800 25600
\tRPC iostats version: 1.1  p/v: 100003/4 (nfs4)
\txprt:\ttcp 0 1 1 0 0 3300 3300 0 3300 0 1 0 0
\tper-op statistics
\t        NULL: 1 1 0 44 24 0 0 0 0
\t        READ: 300 300 0 48000 314572800 3 2100 2160 0
\t       WRITE: 100 101 0 104857600 17600 12 1500 1540 0
\t      COMMIT: 5 5 0 840 720 0 10 11 0
\t        OPEN: 220 220 0 61600 87120 1 310 330 2
\tOPEN_CONFIRM: 0 0 0 0 0 0 0 0 0
\t       CLOSE: 218 218 0 45344 28776 0 190 200 0
\t     SETATTR: 6 6 0 1392 1728 0 9 9 0
\t      FSINFO: 2 2 0 320 432 0 1 1 0
\t       RENEW: 0 0 0 0 0 0 0 0 0
\t        LOCK: 14 14 0 3416 1512 0 20 21 0
\t       LOCKU: 14 14 0 2912 1456 0 18 18 0
\t      ACCESS: 410 410 0 73800 68880 2 260 270 0
\t     GETATTR: 3300 3300 0 580800 712800 18 2010 2100 0
\t      LOOKUP: 980 980 0 192080 253680 5 720 750 14
\t      REMOVE: 3 3 0 600 396 0 4 4 0
\t      RENAME: 1 1 0 268 300 0 2 2 0
\t     READDIR: 40 40 0 8640 327680 0 80 84 0
\t SERVER_CAPS: 3 3 0 468 552 0 1 1 0
\t DELEGRETURN: 12 12 0 2688 2016 0 14 15 0
\t EXCHANGE_ID: 2 2 0 560 216 0 3 3 0
\tCREATE_SESSION: 1 1 0 196 124 0 2 2 0
\t    SEQUENCE: 150 150 0 25200 11400 0 120 125 0
\tRECLAIM_COMPLETE: 1 1 0 132 88 0 4 4 0
";

/// Local mounts only.
pub const MOUNTSTATS_NO_NFS: &str = "\
device sysfs mounted on /sys with fstype sysfs
device proc mounted on /proc with fstype proc
device /dev/sda1 mounted on / with fstype ext4
device /dev/sda2 mounted on /boot with fstype ext4
";

impl MockFs {
    /// NFS client with an NFSv3 and an NFSv4 mount.
    pub fn nfs_client() -> Self {
        let mut fs = Self::new();
        fs.add_file(DEFAULT_MOUNTSTATS_PATH, MOUNTSTATS);
        fs
    }

    /// Host without NFS mounts.
    pub fn no_nfs() -> Self {
        let mut fs = Self::new();
        fs.add_file(DEFAULT_MOUNTSTATS_PATH, MOUNTSTATS_NO_NFS);
        fs
    }
}
