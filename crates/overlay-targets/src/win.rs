#![cfg(windows)]

use std::mem;
use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::{CloseHandle, BOOL, COLORREF, HWND, LPARAM, POINT, RECT, TRUE},
        Graphics::{
            Dwm::{DwmGetWindowAttribute, DWMWA_CLOAKED, DWMWA_EXTENDED_FRAME_BOUNDS},
            Gdi::{
                EnumDisplayDevicesW, EnumDisplayMonitors, EnumDisplaySettingsW, GetMonitorInfoW,
                MonitorFromPoint, DEVMODEW, DISPLAY_DEVICEW, ENUM_CURRENT_SETTINGS, HDC,
                HMONITOR, MONITORINFOEXW, MONITOR_DEFAULTTONEAREST,
            },
        },
        System::Threading::{
            OpenProcess, QueryFullProcessImageNameW, PROCESS_NAME_FORMAT,
            PROCESS_QUERY_LIMITED_INFORMATION,
        },
        UI::WindowsAndMessaging::{
            EnumWindows, GetClassNameW, GetLayeredWindowAttributes, GetWindow, GetWindowLongPtrW,
            GetWindowTextLengthW, GetWindowTextW, GetWindowThreadProcessId, IsIconic, IsWindow,
            IsWindowVisible, GWL_EXSTYLE, GWL_STYLE, GW_HWNDPREV, LAYERED_WINDOW_ATTRIBUTES_FLAGS,
            LWA_ALPHA, WS_CHILD, WS_EX_LAYERED, WS_EX_TOPMOST,
        },
    },
};

use crate::bounds::{PhysicalBounds, PhysicalPosition, PhysicalSize};
use crate::{LEVEL_DOCK, LEVEL_FLOATING, LEVEL_NORMAL};

/// Shell windows that behave like a dock: always present, never obstructing.
const SHELL_TRAY_CLASSES: [&str; 2] = ["Shell_TrayWnd", "Shell_SecondaryTrayWnd"];

#[derive(Clone, Copy)]
pub struct DisplayImpl(pub HMONITOR);

unsafe impl Send for DisplayImpl {}

impl DisplayImpl {
    pub fn primary() -> Option<Self> {
        const MONITORINFOF_PRIMARY: u32 = 1u32;

        for display in Self::list() {
            let mut info = MONITORINFOEXW::default();
            info.monitorInfo.cbSize = mem::size_of::<MONITORINFOEXW>() as u32;

            unsafe {
                if GetMonitorInfoW(display.0, &mut info as *mut _ as *mut _).as_bool()
                    && (info.monitorInfo.dwFlags & MONITORINFOF_PRIMARY) != 0
                {
                    return Some(display);
                }
            }
        }

        let point = POINT { x: 0, y: 0 };
        let monitor = unsafe { MonitorFromPoint(point, MONITOR_DEFAULTTONEAREST) };
        (!monitor.is_invalid()).then_some(Self(monitor))
    }

    pub fn list() -> Vec<Self> {
        unsafe extern "system" fn monitor_enum_proc(
            hmonitor: HMONITOR,
            _hdc: HDC,
            _lprc_clip: *mut RECT,
            lparam: LPARAM,
        ) -> BOOL {
            let list = unsafe { &mut *(lparam.0 as *mut Vec<DisplayImpl>) };
            list.push(DisplayImpl(hmonitor));
            TRUE
        }

        let mut list = vec![];
        unsafe {
            let _ = EnumDisplayMonitors(
                None,
                None,
                Some(monitor_enum_proc),
                LPARAM(std::ptr::addr_of_mut!(list) as isize),
            );
        }

        list
    }

    pub fn raw_id(&self) -> u64 {
        self.0 .0 as u64
    }

    pub fn physical_bounds(&self) -> Option<PhysicalBounds> {
        let mut info = MONITORINFOEXW::default();
        info.monitorInfo.cbSize = mem::size_of::<MONITORINFOEXW>() as u32;

        unsafe { GetMonitorInfoW(self.0, &mut info as *mut _ as *mut _) }
            .as_bool()
            .then(|| {
                let rect = info.monitorInfo.rcMonitor;
                PhysicalBounds::new(
                    PhysicalPosition::new(rect.left as f64, rect.top as f64),
                    PhysicalSize::new(
                        rect.right as f64 - rect.left as f64,
                        rect.bottom as f64 - rect.top as f64,
                    ),
                )
            })
    }

    pub fn refresh_rate(&self) -> f64 {
        let mut info = MONITORINFOEXW::default();
        info.monitorInfo.cbSize = mem::size_of::<MONITORINFOEXW>() as u32;

        unsafe {
            if !GetMonitorInfoW(self.0, &mut info as *mut _ as *mut _).as_bool() {
                return 0.0;
            }

            let device_name = info.szDevice;
            let mut devmode = DEVMODEW {
                dmSize: mem::size_of::<DEVMODEW>() as u16,
                ..Default::default()
            };

            if EnumDisplaySettingsW(
                PCWSTR(device_name.as_ptr()),
                ENUM_CURRENT_SETTINGS,
                &mut devmode,
            )
            .as_bool()
            {
                devmode.dmDisplayFrequency as f64
            } else {
                0.0
            }
        }
    }

    pub fn name(&self) -> Option<String> {
        unsafe {
            let mut monitor_info = MONITORINFOEXW::default();
            monitor_info.monitorInfo.cbSize = mem::size_of::<MONITORINFOEXW>() as u32;

            if !GetMonitorInfoW(self.0, &mut monitor_info as *mut _ as *mut _).as_bool() {
                return None;
            }

            let device_name = PCWSTR::from_raw(monitor_info.szDevice.as_ptr());
            let mut display_device = DISPLAY_DEVICEW {
                cb: mem::size_of::<DISPLAY_DEVICEW>() as u32,
                ..Default::default()
            };

            if EnumDisplayDevicesW(device_name, 0, &mut display_device, 0).as_bool() {
                return Some(utf16_until_nul(&display_device.DeviceString));
            }
        }

        None
    }
}

#[derive(Clone, Copy)]
pub struct WindowImpl(HWND);

unsafe impl Send for WindowImpl {}

impl WindowImpl {
    pub fn list() -> Vec<Self> {
        unsafe extern "system" fn enum_windows_proc(hwnd: HWND, lparam: LPARAM) -> BOOL {
            let list = unsafe { &mut *(lparam.0 as *mut Vec<WindowImpl>) };

            if is_top_level(hwnd) {
                list.push(WindowImpl(hwnd));
            }

            TRUE
        }

        let mut list = vec![];
        unsafe {
            let _ = EnumWindows(
                Some(enum_windows_proc),
                LPARAM(std::ptr::addr_of_mut!(list) as isize),
            );
        }

        list
    }

    pub fn from_id(id: u64) -> Option<Self> {
        let hwnd = HWND(id as usize as *mut std::ffi::c_void);
        unsafe { IsWindow(hwnd) }.as_bool().then_some(Self(hwnd))
    }

    pub fn id(&self) -> u64 {
        self.0 .0 as u64
    }

    pub fn windows_above(&self) -> Vec<Self> {
        let mut above = vec![];
        let mut current = self.0;

        // GW_HWNDPREV walks towards the front of the z-order.
        while let Ok(previous) = unsafe { GetWindow(current, GW_HWNDPREV) } {
            if previous.is_invalid() {
                break;
            }
            if is_top_level(previous) {
                above.push(WindowImpl(previous));
            }
            current = previous;
        }

        // Front-most first, matching `list()`.
        above.reverse();
        tracing::trace!(count = above.len(), "windows above {:?}", self.0);
        above
    }

    pub fn owner_pid(&self) -> Option<u32> {
        let mut process_id = 0u32;
        unsafe { GetWindowThreadProcessId(self.0, Some(&mut process_id)) };
        (process_id != 0).then_some(process_id)
    }

    pub fn owner_name(&self) -> Option<String> {
        let process_id = self.owner_pid()?;

        unsafe {
            let process_handle =
                OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, process_id).ok()?;

            let mut buffer = [0u16; 1024];
            let mut buffer_size = buffer.len() as u32;

            let result = QueryFullProcessImageNameW(
                process_handle,
                PROCESS_NAME_FORMAT::default(),
                windows::core::PWSTR(buffer.as_mut_ptr()),
                &mut buffer_size,
            );

            let _ = CloseHandle(process_handle);

            if result.is_ok() && buffer_size > 0 {
                let path_str = String::from_utf16_lossy(&buffer[..buffer_size as usize]);
                std::path::Path::new(&path_str)
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            } else {
                None
            }
        }
    }

    pub fn physical_bounds(&self) -> Option<PhysicalBounds> {
        let mut rect = RECT::default();
        unsafe {
            DwmGetWindowAttribute(
                self.0,
                DWMWA_EXTENDED_FRAME_BOUNDS,
                (&raw mut rect).cast(),
                size_of::<RECT>() as u32,
            )
            .ok()?;
        }

        Some(PhysicalBounds::from_xywh(
            rect.left as f64,
            rect.top as f64,
            (rect.right - rect.left) as f64,
            (rect.bottom - rect.top) as f64,
        ))
    }

    pub fn name(&self) -> Option<String> {
        let len = unsafe { GetWindowTextLengthW(self.0) };
        if len <= 0 {
            return Some(String::new());
        }

        let mut name = vec![0u16; len as usize + 1];
        let copied = unsafe { GetWindowTextW(self.0, &mut name) };
        if copied == 0 {
            return Some(String::new());
        }

        Some(utf16_until_nul(&name))
    }

    pub fn level(&self) -> i32 {
        if SHELL_TRAY_CLASSES.contains(&class_name(self.0).as_str()) {
            return LEVEL_DOCK;
        }

        let ex_styles = unsafe { GetWindowLongPtrW(self.0, GWL_EXSTYLE) };
        if (ex_styles & WS_EX_TOPMOST.0 as isize) != 0 {
            LEVEL_FLOATING
        } else {
            LEVEL_NORMAL
        }
    }

    pub fn alpha(&self) -> f64 {
        let ex_styles = unsafe { GetWindowLongPtrW(self.0, GWL_EXSTYLE) };
        if (ex_styles & WS_EX_LAYERED.0 as isize) == 0 {
            return 1.0;
        }

        let mut alpha = 255u8;
        let mut flags = LAYERED_WINDOW_ATTRIBUTES_FLAGS::default();
        let queried = unsafe {
            GetLayeredWindowAttributes(
                self.0,
                None::<*mut COLORREF>,
                Some(&mut alpha),
                Some(&mut flags),
            )
        };

        if queried.is_ok() && (flags.0 & LWA_ALPHA.0) != 0 {
            alpha as f64 / 255.0
        } else {
            1.0
        }
    }

    pub fn is_onscreen(&self) -> bool {
        unsafe {
            if !IsWindowVisible(self.0).as_bool() || IsIconic(self.0).as_bool() {
                return false;
            }

            let mut cloaked = 0u32;
            let cloak_query = DwmGetWindowAttribute(
                self.0,
                DWMWA_CLOAKED,
                (&raw mut cloaked).cast(),
                size_of::<u32>() as u32,
            );

            cloak_query.is_err() || cloaked == 0
        }
    }
}

fn is_top_level(hwnd: HWND) -> bool {
    let styles = unsafe { GetWindowLongPtrW(hwnd, GWL_STYLE) };
    (styles & WS_CHILD.0 as isize) == 0
}

fn class_name(hwnd: HWND) -> String {
    let mut buffer = [0u16; 256];
    let len = unsafe { GetClassNameW(hwnd, &mut buffer) };
    if len <= 0 {
        return String::new();
    }
    String::from_utf16_lossy(&buffer[..len as usize])
}

fn utf16_until_nul(buffer: &[u16]) -> String {
    let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
    String::from_utf16_lossy(&buffer[..len])
}
