//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::jstring;
use jni::JNIEnv;

use crate::{layout_to_json, render_json_to_svg, PlaqueResult};

fn optional_string(env: &mut JNIEnv, s: &JString) -> Option<String> {
    if s.is_null() {
        None
    } else {
        env.get_string(s).ok().map(|s| s.into())
    }
}

fn call_with_json(
    env: &mut JNIEnv,
    metadata_json: JString,
    options_json: JString,
    f: fn(&str, Option<&str>) -> PlaqueResult<String>,
) -> jstring {
    let Some(meta) = optional_string(env, &metadata_json) else {
        return std::ptr::null_mut();
    };
    let opts = optional_string(env, &options_json);

    match f(&meta, opts.as_deref()) {
        Ok(out) => match env.new_string(&out) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            tracing::warn!(error = %e, "plaque request rejected");
            std::ptr::null_mut()
        }
    }
}

/// Render a plaque from metadata and options JSON.
///
/// Called from Kotlin as:
///   external fun renderPlaque(metadataJson: String, optionsJson: String?): String?
#[no_mangle]
pub extern "system" fn Java_com_plaqueify_app_PlaqueLib_renderPlaque(
    mut env: JNIEnv,
    _class: JClass,
    metadata_json: JString,
    options_json: JString,
) -> jstring {
    call_with_json(&mut env, metadata_json, options_json, render_json_to_svg)
}

/// Compute the plaque layout as JSON.
///
/// Called from Kotlin as:
///   external fun plaqueLayout(metadataJson: String, optionsJson: String?): String?
#[no_mangle]
pub extern "system" fn Java_com_plaqueify_app_PlaqueLib_plaqueLayout(
    mut env: JNIEnv,
    _class: JClass,
    metadata_json: JString,
    options_json: JString,
) -> jstring {
    call_with_json(&mut env, metadata_json, options_json, layout_to_json)
}
