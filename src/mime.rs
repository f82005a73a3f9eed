//! MIME content types for uploads.

/// A MIME content type.
///
/// Covers the common document, image, audio, video, text, and archive types
/// with their canonical IANA strings, plus [`MimeType::Custom`] as an
/// escape hatch. [`MimeType::as_str`] is what gets emitted as the
/// `Content-Type` of a multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MimeType {
    /// `application/pdf`
    Pdf,
    /// `image/png`
    Png,
    /// `image/jpeg`
    Jpeg,
    /// `image/gif`
    Gif,
    /// `image/bmp`
    Bmp,
    /// `image/svg+xml`
    Svg,
    /// `video/mp4`
    Mp4,
    /// `video/quicktime`
    Mov,
    /// `video/x-msvideo`
    Avi,
    /// `video/x-matroska`
    Mkv,
    /// `video/webm`
    Webm,
    /// `audio/wav`
    Wav,
    /// `audio/mpeg`
    Mp3,
    /// `audio/ogg`
    Ogg,
    /// `audio/flac`
    Flac,
    /// `text/plain`
    Txt,
    /// `text/html`
    Html,
    /// `text/css`
    Css,
    /// `application/javascript`
    Js,
    /// `application/json`
    Json,
    /// `application/xml`
    Xml,
    /// `text/csv`
    Csv,
    /// `application/msword`
    Doc,
    /// `application/vnd.openxmlformats-officedocument.wordprocessingml.document`
    Docx,
    /// `application/vnd.ms-powerpoint`
    Ppt,
    /// `application/vnd.openxmlformats-officedocument.presentationml.presentation`
    Pptx,
    /// `application/vnd.ms-excel`
    Xls,
    /// `application/vnd.openxmlformats-officedocument.spreadsheetml.sheet`
    Xlsx,
    /// `application/zip`
    Zip,
    /// `application/vnd.rar`
    Rar,
    /// `application/x-tar`
    Tar,
    /// An arbitrary content type string.
    Custom(String),
}

impl MimeType {
    /// Returns the canonical IANA string for this type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            MimeType::Pdf => "application/pdf",
            MimeType::Png => "image/png",
            MimeType::Jpeg => "image/jpeg",
            MimeType::Gif => "image/gif",
            MimeType::Bmp => "image/bmp",
            MimeType::Svg => "image/svg+xml",
            MimeType::Mp4 => "video/mp4",
            MimeType::Mov => "video/quicktime",
            MimeType::Avi => "video/x-msvideo",
            MimeType::Mkv => "video/x-matroska",
            MimeType::Webm => "video/webm",
            MimeType::Wav => "audio/wav",
            MimeType::Mp3 => "audio/mpeg",
            MimeType::Ogg => "audio/ogg",
            MimeType::Flac => "audio/flac",
            MimeType::Txt => "text/plain",
            MimeType::Html => "text/html",
            MimeType::Css => "text/css",
            MimeType::Js => "application/javascript",
            MimeType::Json => "application/json",
            MimeType::Xml => "application/xml",
            MimeType::Csv => "text/csv",
            MimeType::Doc => "application/msword",
            MimeType::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            MimeType::Ppt => "application/vnd.ms-powerpoint",
            MimeType::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
            MimeType::Xls => "application/vnd.ms-excel",
            MimeType::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            MimeType::Zip => "application/zip",
            MimeType::Rar => "application/vnd.rar",
            MimeType::Tar => "application/x-tar",
            MimeType::Custom(value) => value,
        }
    }

    /// Returns the canonical file extension for this type, without the dot.
    ///
    /// For [`MimeType::Custom`] the subtype tail of the string is used
    /// (`application/x-foo` yields `x-foo`), which keeps generated filenames
    /// reasonable for types this enum does not know about.
    #[must_use]
    pub fn extension(&self) -> &str {
        match self {
            MimeType::Pdf => "pdf",
            MimeType::Png => "png",
            MimeType::Jpeg => "jpg",
            MimeType::Gif => "gif",
            MimeType::Bmp => "bmp",
            MimeType::Svg => "svg",
            MimeType::Mp4 => "mp4",
            MimeType::Mov => "mov",
            MimeType::Avi => "avi",
            MimeType::Mkv => "mkv",
            MimeType::Webm => "webm",
            MimeType::Wav => "wav",
            MimeType::Mp3 => "mp3",
            MimeType::Ogg => "ogg",
            MimeType::Flac => "flac",
            MimeType::Txt => "txt",
            MimeType::Html => "html",
            MimeType::Css => "css",
            MimeType::Js => "js",
            MimeType::Json => "json",
            MimeType::Xml => "xml",
            MimeType::Csv => "csv",
            MimeType::Doc => "doc",
            MimeType::Docx => "docx",
            MimeType::Ppt => "ppt",
            MimeType::Pptx => "pptx",
            MimeType::Xls => "xls",
            MimeType::Xlsx => "xlsx",
            MimeType::Zip => "zip",
            MimeType::Rar => "rar",
            MimeType::Tar => "tar",
            MimeType::Custom(value) => {
                let subtype = value.rsplit('/').next().unwrap_or(value.as_str());
                subtype.split('+').next().unwrap_or(subtype)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_iana_strings() {
        assert_eq!(MimeType::Pdf.as_str(), "application/pdf");
        assert_eq!(MimeType::Png.as_str(), "image/png");
        assert_eq!(MimeType::Jpeg.as_str(), "image/jpeg");
        assert_eq!(MimeType::Gif.as_str(), "image/gif");
        assert_eq!(MimeType::Bmp.as_str(), "image/bmp");
        assert_eq!(MimeType::Svg.as_str(), "image/svg+xml");
        assert_eq!(MimeType::Mp4.as_str(), "video/mp4");
        assert_eq!(MimeType::Mov.as_str(), "video/quicktime");
        assert_eq!(MimeType::Avi.as_str(), "video/x-msvideo");
        assert_eq!(MimeType::Mkv.as_str(), "video/x-matroska");
        assert_eq!(MimeType::Webm.as_str(), "video/webm");
        assert_eq!(MimeType::Wav.as_str(), "audio/wav");
        assert_eq!(MimeType::Mp3.as_str(), "audio/mpeg");
        assert_eq!(MimeType::Ogg.as_str(), "audio/ogg");
        assert_eq!(MimeType::Flac.as_str(), "audio/flac");
        assert_eq!(MimeType::Txt.as_str(), "text/plain");
        assert_eq!(MimeType::Html.as_str(), "text/html");
        assert_eq!(MimeType::Css.as_str(), "text/css");
        assert_eq!(MimeType::Js.as_str(), "application/javascript");
        assert_eq!(MimeType::Json.as_str(), "application/json");
        assert_eq!(MimeType::Xml.as_str(), "application/xml");
        assert_eq!(MimeType::Csv.as_str(), "text/csv");
        assert_eq!(MimeType::Doc.as_str(), "application/msword");
        assert_eq!(
            MimeType::Docx.as_str(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(MimeType::Ppt.as_str(), "application/vnd.ms-powerpoint");
        assert_eq!(
            MimeType::Pptx.as_str(),
            "application/vnd.openxmlformats-officedocument.presentationml.presentation"
        );
        assert_eq!(MimeType::Xls.as_str(), "application/vnd.ms-excel");
        assert_eq!(
            MimeType::Xlsx.as_str(),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert_eq!(MimeType::Zip.as_str(), "application/zip");
        assert_eq!(MimeType::Rar.as_str(), "application/vnd.rar");
        assert_eq!(MimeType::Tar.as_str(), "application/x-tar");
    }

    #[test]
    fn test_custom_type_passes_through() {
        let mime = MimeType::Custom("application/custom".to_string());
        assert_eq!(mime.as_str(), "application/custom");
    }

    #[test]
    fn test_extensions() {
        assert_eq!(MimeType::Png.extension(), "png");
        assert_eq!(MimeType::Jpeg.extension(), "jpg");
        assert_eq!(MimeType::Svg.extension(), "svg");
        assert_eq!(MimeType::Mov.extension(), "mov");
        assert_eq!(MimeType::Docx.extension(), "docx");
    }

    #[test]
    fn test_custom_extension_uses_subtype_tail() {
        let mime = MimeType::Custom("application/x-foo".to_string());
        assert_eq!(mime.extension(), "x-foo");
        let structured = MimeType::Custom("image/svg+xml".to_string());
        assert_eq!(structured.extension(), "svg");
    }
}
