/// 验证文件内容的魔术字节是否与扩展名匹配
///
/// 课程资源和作业附件以 PDF、图片和音视频为主，上传时只看
/// 扩展名不够：改名的可执行文件照样能传上来。这里用文件头做
/// 第二道校验。
///
/// 返回 `true` 表示魔术字节匹配或该类型无需校验。
pub fn validate_magic_bytes(data: &[u8], extension: &str) -> bool {
    if data.is_empty() {
        return false;
    }

    match extension.to_lowercase().as_str() {
        // 文档
        ".pdf" => data.starts_with(b"%PDF"),
        ".docx" | ".xlsx" | ".pptx" => data.starts_with(&[0x50, 0x4B, 0x03, 0x04]),

        // 图片
        ".png" => data.starts_with(&[0x89, 0x50, 0x4E, 0x47]),
        ".jpg" | ".jpeg" => data.starts_with(&[0xFF, 0xD8, 0xFF]),
        ".webp" => data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP",

        // 音视频（语言课的听力材料）
        ".mp3" => data.starts_with(b"ID3") || data.starts_with(&[0xFF, 0xFB]),
        ".mp4" | ".m4a" => data.len() >= 8 && &data[4..8] == b"ftyp",
        ".ogg" => data.starts_with(b"OggS"),

        // 压缩包
        ".zip" => data.starts_with(&[0x50, 0x4B, 0x03, 0x04]),

        // 文本格式不检查魔术字节
        ".txt" | ".md" | ".json" | ".csv" => true,

        // 未知格式默认拒绝
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_magic() {
        assert!(validate_magic_bytes(b"%PDF-1.7", ".pdf"));
        assert!(validate_magic_bytes(b"%PDF-1.7", ".PDF"));
        assert!(!validate_magic_bytes(b"MZ\x90\x00", ".pdf"));
    }

    #[test]
    fn test_image_magic() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert!(validate_magic_bytes(&png, ".png"));
        assert!(!validate_magic_bytes(&png, ".jpg"));

        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0];
        assert!(validate_magic_bytes(&jpeg, ".jpeg"));
    }

    #[test]
    fn test_audio_magic() {
        assert!(validate_magic_bytes(b"ID3\x04\x00", ".mp3"));
        let mp4 = [0x00, 0x00, 0x00, 0x20, b'f', b't', b'y', b'p'];
        assert!(validate_magic_bytes(&mp4, ".mp4"));
    }

    #[test]
    fn test_text_files_skip_check() {
        assert!(validate_magic_bytes(b"# Lesson notes", ".md"));
        assert!(validate_magic_bytes(b"{}", ".json"));
    }

    #[test]
    fn test_empty_and_unknown_rejected() {
        assert!(!validate_magic_bytes(&[], ".pdf"));
        assert!(!validate_magic_bytes(b"anything", ".exe"));
    }
}
