//! Upload form page

/// Default HTML served on `GET /upload`
pub const UPLOAD_FORM: &str = r#"
<!DOCTYPE html>
<html>
<head>
  <title>Upload</title>
</head>
<body>
  <h1>Upload your onlinemapsources.xml</h1>

  <form action="/upload" method="POST" id="uploadform" enctype="multipart/form-data">
    <input type="file" id="fileinput" multiple="false" name="file">
    <input type="submit" id="filesubmit" value="Upload">
  </form>

</body>
</html>
"#;
