mod md5;
mod sha256;
