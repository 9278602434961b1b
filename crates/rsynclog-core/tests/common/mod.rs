//! Shared fixtures: a two-job rsync log (one clean run, one I/O failure).

use std::path::{Path, PathBuf};

pub const SAMPLE_LOG: &str = "\
Time: Mon 08 Jun 2020 08:47:11 PM CST. Job begining.
2020/06/08 20:47:11 [36113] machine=server1 user=mrodriguez path=~/backup
2020/06/08 20:47:11 [36113] building file list
2020/06/08 20:47:16 [36113] Number of files: 85 (reg: 55, dir: 30)
2020/06/08 20:47:16 [36113] Number of created files: 84 (reg: 55, dir: 29)
2020/06/08 20:47:16 [36113] Number of deleted files: 0
2020/06/08 20:47:16 [36113] Total bytes sent: 11,131,283
2020/06/08 20:47:16 [36113] sent 11,131,283 bytes  received 74,906 bytes  2,037,488.91 bytes/sec
2020/06/08 20:47:16 [36113] total size is 11,098,016  speedup is 0.99
2020/06/08 20:47:16 [36113] [sender] _exit_cleanup(code=0, file=main.c, line=1207): entered
Time: Mon 08 Jun 2020 08:47:16 PM CST. Job ending.
Time: Mon 08 Jun 2020 08:47:40 PM CST. Job begining.
2020/06/08 20:47:40 [36121] machine=server2 user=mrodriguez path=/mnt/archive
2020/06/08 20:47:43 [36121] rsync: write failed on \"/mnt/archive/big.iso\": No space left on device (28)
2020/06/08 20:47:43 [36121] rsync error: error in file IO (code 11) at receiver.c(374) [receiver=3.1.3]
2020/06/08 20:47:43 [36121] [sender] _exit_cleanup(code=11, file=io.c, line=-1642): entered
Time: Mon 08 Jun 2020 08:47:43 PM CST. Job ending.
";

pub fn write_log(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("rsync.log");
    std::fs::write(&path, contents).unwrap();
    path
}
