use loanwise::infrastructure::audio::TempAudioFile;

#[tokio::test]
async fn given_audio_bytes_when_writing_then_file_exists_with_content() {
    let file = TempAudioFile::write(b"fake wav bytes").await.unwrap();

    assert!(file.path().exists());
    let content = tokio::fs::read(file.path()).await.unwrap();
    assert_eq!(content, b"fake wav bytes");
}

#[tokio::test]
async fn given_written_file_when_dropped_then_file_is_removed() {
    let file = TempAudioFile::write(b"fake wav bytes").await.unwrap();
    let path = file.path().to_path_buf();

    drop(file);

    assert!(!path.exists());
}

#[tokio::test]
async fn given_two_files_when_writing_concurrently_then_paths_are_distinct() {
    let a = TempAudioFile::write(b"first").await.unwrap();
    let b = TempAudioFile::write(b"second").await.unwrap();

    assert_ne!(a.path(), b.path());
    assert_eq!(tokio::fs::read(a.path()).await.unwrap(), b"first");
    assert_eq!(tokio::fs::read(b.path()).await.unwrap(), b"second");
}
