// src/controllers/osc.rs
// OSC Controller

use nannou_osc as osc;
use std::error::Error;

#[derive(Debug)]
pub enum OscCommand {
    HighlightHotspot {
        id: String,
        on: bool,
    },
    ClearHighlights,
    SetOverlay {
        id: String,
        on: bool,
    },
    AddHotspot {
        id: String,
        x: f32,
        y: f32,
        shape_kind: String,
    },
    RemoveHotspot {
        id: String,
    },
    ToggleLayer,
    ToggleBackdrop,
}

pub struct OscController {
    command_queue: Vec<OscCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, Box<dyn Error>> {
        let receiver = osc::receiver(port)?;

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                match message.addr.as_str() {
                    "/hotspot/highlight" => {
                        if let [osc::Type::String(id), osc::Type::Int(on)] = &message.args[..] {
                            self.command_queue.push(OscCommand::HighlightHotspot {
                                id: id.clone(),
                                on: *on != 0,
                            });
                        }
                    }
                    "/hotspot/clear" => {
                        self.command_queue.push(OscCommand::ClearHighlights);
                    }
                    "/hotspot/overlay" => {
                        if let [osc::Type::String(id), osc::Type::Int(on)] = &message.args[..] {
                            self.command_queue.push(OscCommand::SetOverlay {
                                id: id.clone(),
                                on: *on != 0,
                            });
                        }
                    }
                    "/hotspot/add" => {
                        if let [osc::Type::String(id), osc::Type::Float(x), osc::Type::Float(y), osc::Type::String(shape_kind)] =
                            &message.args[..]
                        {
                            self.command_queue.push(OscCommand::AddHotspot {
                                id: id.clone(),
                                x: *x,
                                y: *y,
                                shape_kind: shape_kind.clone(),
                            });
                        }
                    }
                    "/hotspot/remove" => {
                        if let [osc::Type::String(id)] = &message.args[..] {
                            self.command_queue.push(OscCommand::RemoveHotspot {
                                id: id.clone(),
                            });
                        }
                    }
                    "/layer/toggle" => {
                        self.command_queue.push(OscCommand::ToggleLayer);
                    }
                    "/backdrop/toggle" => {
                        self.command_queue.push(OscCommand::ToggleBackdrop);
                    }
                    _ => println!("Unknown OSC address pattern: {}", message.addr),
                };
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<OscCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

pub struct OscSender {
    sender: osc::Sender,
    target_addr: String,
    target_port: u16,
}

impl OscSender {
    pub fn new(target_port: u16) -> Result<Self, Box<dyn Error>> {
        let target_addr = "127.0.0.1".to_string();
        let sender = osc::sender()?;

        Ok(Self {
            sender,
            target_addr,
            target_port,
        })
    }

    pub fn send_highlight_hotspot(&self, id: &str, on: i32) {
        let addr = "/hotspot/highlight".to_string();
        let args = vec![osc::Type::String(id.to_string()), osc::Type::Int(on)];
        self.sender
            .send((addr, args), (self.target_addr.as_str(), self.target_port))
            .ok();
    }

    pub fn send_clear_highlights(&self) {
        let addr = "/hotspot/clear".to_string();
        let args: Vec<osc::Type> = vec![];
        self.sender
            .send((addr, args), (self.target_addr.as_str(), self.target_port))
            .ok();
    }

    pub fn send_set_overlay(&self, id: &str, on: i32) {
        let addr = "/hotspot/overlay".to_string();
        let args = vec![osc::Type::String(id.to_string()), osc::Type::Int(on)];
        self.sender
            .send((addr, args), (self.target_addr.as_str(), self.target_port))
            .ok();
    }

    pub fn send_add_hotspot(&self, id: &str, x: f32, y: f32, shape_kind: &str) {
        let addr = "/hotspot/add".to_string();
        let args = vec![
            osc::Type::String(id.to_string()),
            osc::Type::Float(x),
            osc::Type::Float(y),
            osc::Type::String(shape_kind.to_string()),
        ];
        self.sender
            .send((addr, args), (self.target_addr.as_str(), self.target_port))
            .ok();
    }

    pub fn send_remove_hotspot(&self, id: &str) {
        let addr = "/hotspot/remove".to_string();
        let args = vec![osc::Type::String(id.to_string())];
        self.sender
            .send((addr, args), (self.target_addr.as_str(), self.target_port))
            .ok();
    }

    pub fn send_toggle_layer(&self) {
        let addr = "/layer/toggle".to_string();
        let args: Vec<osc::Type> = vec![];
        self.sender
            .send((addr, args), (self.target_addr.as_str(), self.target_port))
            .ok();
    }

    pub fn send_toggle_backdrop(&self) {
        let addr = "/backdrop/toggle".to_string();
        let args: Vec<osc::Type> = vec![];
        self.sender
            .send((addr, args), (self.target_addr.as_str(), self.target_port))
            .ok();
    }
}
