use super::{build, smallest_deletion, sum_of_small_dirs, BuildError, Fs, NodeId, TranscriptError};

const EXAMPLE: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k";

fn dir(fs: &Fs, path: &[&str]) -> NodeId {
    let mut id = fs.root();

    for name in path {
        id = fs.child(id, name).expect("missing directory");
    }

    id
}

#[test]
fn example_sizes() {
    let fs = build(EXAMPLE.lines()).unwrap();

    assert_eq!(fs.size(dir(&fs, &["a", "e"])), 584);
    assert_eq!(fs.size(dir(&fs, &["a"])), 94853);
    assert_eq!(fs.size(dir(&fs, &["d"])), 24933642);
    assert_eq!(fs.size(fs.root()), 48381165);
}

#[test]
fn example_queries() {
    let fs = build(EXAMPLE.lines()).unwrap();

    assert_eq!(sum_of_small_dirs(&fs, 100000), 95437);
    assert_eq!(smallest_deletion(&fs, 70000000, 30000000).unwrap(), 24933642);
}

#[test]
fn walk_is_preorder_and_repeatable() {
    let fs = build(EXAMPLE.lines()).unwrap();

    let first: Vec<_> = fs.walk().map(|id| fs.path(id)).collect();
    assert_eq!(first, ["/", "/a", "/a/e", "/d"]);

    let second: Vec<_> = fs.walk().map(|id| fs.path(id)).collect();
    assert_eq!(first, second);
}

#[test]
fn relisting_directories_does_not_duplicate() {
    let transcript = "\
$ cd /
$ ls
dir a
100 x
$ ls
dir a
100 x";

    let fs = build(transcript.lines()).unwrap();

    assert_eq!(fs.children(fs.root()).count(), 1);
    assert_eq!(fs.size(fs.root()), 100);
}

#[test]
fn relisting_files_replaces_the_old_set() {
    let transcript = "\
$ cd /
$ ls
100 x
200 y
$ ls
50 z";

    let fs = build(transcript.lines()).unwrap();

    assert_eq!(fs.files(fs.root()).len(), 1);
    assert_eq!(fs.size(fs.root()), 50);
}

#[test]
fn relisting_with_no_files_clears_them() {
    let transcript = "\
$ cd /
$ ls
dir a
100 x
$ cd a
$ ls
25 y
$ cd ..
$ ls
dir a";

    let fs = build(transcript.lines()).unwrap();

    assert!(fs.files(fs.root()).is_empty());
    assert_eq!(fs.size(fs.root()), 25);
}

#[test]
fn duplicate_file_name_in_one_listing_keeps_the_last() {
    let transcript = "\
$ cd /
$ ls
5 x
7 x";

    let fs = build(transcript.lines()).unwrap();

    assert_eq!(fs.files(fs.root()).len(), 1);
    assert_eq!(fs.size(fs.root()), 7);
}

#[test]
fn entering_an_unlisted_directory_creates_it() {
    let transcript = "\
$ cd /
$ cd a
$ ls
10 x";

    let fs = build(transcript.lines()).unwrap();

    let a = fs.child(fs.root(), "a").unwrap();
    assert_eq!(fs.size(a), 10);
    assert_eq!(fs.size(fs.root()), 10);
}

#[test]
fn cd_root_at_root_is_a_noop() {
    let transcript = "\
$ cd /
$ cd /
$ ls
10 x";

    let fs = build(transcript.lines()).unwrap();
    assert_eq!(fs.size(fs.root()), 10);
}

#[test]
fn cd_up_at_root_errors() {
    let transcript = "\
$ cd /
$ cd ..";

    let error = build(transcript.lines()).unwrap_err();
    assert!(matches!(error, BuildError::AboveRoot { line: 2 }));
}

#[test]
fn empty_input_yields_an_empty_root() {
    let fs = build("".lines()).unwrap();

    assert_eq!(fs.size(fs.root()), 0);
    assert_eq!(fs.walk().count(), 1);
}

#[test]
fn root_size_counts_each_file_once() {
    let transcript = "\
$ cd /
$ ls
dir a
dir b
1 top
$ cd a
$ ls
2 x
dir c
$ cd c
$ ls
4 y
$ cd /
$ cd b
$ ls
8 z";

    let fs = build(transcript.lines()).unwrap();
    assert_eq!(fs.size(fs.root()), 15);
}

#[test]
fn unknown_command_errors() {
    let error = build("$ pwd".lines()).unwrap_err();

    assert!(matches!(
        error,
        BuildError::Transcript(TranscriptError::BadCommand { line: 1, .. })
    ));
}

#[test]
fn output_before_any_command_errors() {
    let error = build("dir a".lines()).unwrap_err();

    assert!(matches!(
        error,
        BuildError::Transcript(TranscriptError::OutputBeforeCommand { line: 1 })
    ));
}

#[test]
fn bad_file_size_errors() {
    let transcript = "\
$ cd /
$ ls
12x name";

    let error = build(transcript.lines()).unwrap_err();

    assert!(matches!(
        error,
        BuildError::Transcript(TranscriptError::BadSize { line: 3, .. })
    ));
}

#[test]
fn no_deletion_needed_returns_zero() {
    let fs = build(EXAMPLE.lines()).unwrap();

    // Capacity is so large that the required space is already free.
    assert_eq!(smallest_deletion(&fs, 100000000, 30000000).unwrap(), 0);
}

#[test]
fn deletion_shortfall_beyond_root_errors() {
    let transcript = "\
$ cd /
$ ls
10 x";

    let fs = build(transcript.lines()).unwrap();

    // Even deleting everything cannot free the shortfall.
    assert!(smallest_deletion(&fs, 100, 1000).is_err());
}
