use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_float, c_int, c_void};

/**
 * Raw FFI Bindings for the llama.cpp Bridge
 *
 * This is where we venture into the unsafe wilderness of C interop.
 * Everything crossing this boundary is a raw pointer owned by the C++
 * side; the safe wrapper in mod.rs is the only caller.
 */
#[link(name = "llama")]
extern "C" {
    fn yap_engine_create(model_path: *const c_char) -> *mut c_void;
    fn yap_engine_destroy(engine: *mut c_void);
    fn yap_engine_generate(
        engine: *mut c_void,
        prompt: *const c_char,
        max_tokens: c_int,
        temperature: c_float,
        top_p: c_float,
    ) -> *mut c_char;
    fn yap_free_string(str: *mut c_char);
    fn yap_engine_is_loaded(engine: *mut c_void) -> c_int;
}

pub struct RawEngine {
    pub(crate) ptr: *mut c_void,
}

impl RawEngine {
    pub unsafe fn new(model_path: &str) -> Option<Self> {
        let c_path = CString::new(model_path).ok()?;
        let ptr = yap_engine_create(c_path.as_ptr());
        if ptr.is_null() {
            None
        } else {
            Some(RawEngine { ptr })
        }
    }

    pub unsafe fn generate(
        &self,
        prompt: &str,
        max_tokens: i32,
        temperature: f32,
        top_p: f32,
    ) -> Option<String> {
        let c_prompt = CString::new(prompt).ok()?;
        let result_ptr = yap_engine_generate(
            self.ptr,
            c_prompt.as_ptr(),
            max_tokens as c_int,
            temperature as c_float,
            top_p as c_float,
        );
        if result_ptr.is_null() {
            return None;
        }
        let c_str = CStr::from_ptr(result_ptr);
        let rust_string = c_str.to_string_lossy().into_owned();
        yap_free_string(result_ptr);
        Some(rust_string)
    }

    pub unsafe fn is_loaded(&self) -> bool {
        yap_engine_is_loaded(self.ptr) != 0
    }
}

impl Drop for RawEngine {
    fn drop(&mut self) {
        unsafe {
            if !self.ptr.is_null() {
                yap_engine_destroy(self.ptr);
                self.ptr = std::ptr::null_mut();
            }
        }
    }
}

unsafe impl Send for RawEngine {}
